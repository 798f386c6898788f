use crate::domain::errors::TrackerError;
use crate::domain::models::{CoordinateRecord, Coordinates, JoinGap, Park, RegistryRecord};
use crate::services::coordinates::load_coordinates;
use crate::services::registry::load_registry;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Canonical park set: one `Park` per registry record, in registry order.
#[derive(Debug, Clone, Default)]
pub struct JoinResult {
    parks: Vec<Park>,
}

impl JoinResult {
    pub fn parks(&self) -> &[Park] {
        &self.parks
    }

    pub fn into_parks(self) -> Vec<Park> {
        self.parks
    }

    /// Parks that found no coordinate match.
    pub fn gaps(&self) -> Vec<JoinGap> {
        self.parks
            .iter()
            .filter(|p| p.position.is_none())
            .map(|p| JoinGap {
                id: p.id.clone(),
                name: p.name.clone(),
                state: p.state.clone(),
            })
            .collect()
    }
}

/// Left join on `id`. Registry rows are never dropped or repeated: when two
/// coordinate rows share an id the first one wins.
pub fn left_join(base: Vec<RegistryRecord>, coords: Vec<CoordinateRecord>) -> JoinResult {
    let mut lookup: HashMap<String, Option<Coordinates>> = HashMap::with_capacity(coords.len());
    for c in coords {
        lookup.entry(c.id).or_insert(c.position);
    }

    let parks = base
        .into_iter()
        .map(|r| {
            let position = lookup.get(&r.id).copied().flatten();
            Park {
                id: r.id,
                name: r.name,
                state: r.state,
                position,
            }
        })
        .collect();
    JoinResult { parks }
}

pub fn load_parks(registry: &Path, coordinates: &Path) -> Result<JoinResult, TrackerError> {
    let base = load_registry(registry)?;
    let coords = load_coordinates(coordinates)?;
    let joined = left_join(base, coords);

    let gaps = joined.gaps();
    for gap in &gaps {
        warn!(id = %gap.id, name = %gap.name, state = %gap.state, "park without coordinates after join");
    }
    info!(parks = joined.parks().len(), gaps = gaps.len(), "canonical park set ready");
    Ok(joined)
}
