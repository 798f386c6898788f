use crate::domain::constants::{
    EXCLUDED_PARK_NAME, REGISTRY_ID_COLUMN, REGISTRY_NAME_COLUMN, REGISTRY_STATE_COLUMN,
};
use crate::domain::errors::TrackerError;
use crate::domain::models::RegistryRecord;
use crate::services::dataset::Dataset;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

pub fn load_registry(path: &Path) -> Result<Vec<RegistryRecord>, TrackerError> {
    read_registry(Dataset::open(path)?)
}

pub fn read_registry<R: Read>(mut ds: Dataset<R>) -> Result<Vec<RegistryRecord>, TrackerError> {
    let [id, name, state] =
        ds.columns([REGISTRY_ID_COLUMN, REGISTRY_NAME_COLUMN, REGISTRY_STATE_COLUMN])?;
    let records: Vec<RegistryRecord> = ds
        .rows()?
        .iter()
        .map(|row| RegistryRecord {
            id: row.get(id).to_string(),
            name: row.get(name).to_string(),
            state: row.get(state).to_string(),
        })
        .collect();
    debug!(file = %ds.path().display(), rows = records.len(), "read park registry");
    Ok(normalize_registry(records))
}

/// Name-sorted registry without the excluded park. Repeated ids keep their
/// first occurrence in name order.
pub fn normalize_registry(mut records: Vec<RegistryRecord>) -> Vec<RegistryRecord> {
    records.sort_by(|a, b| a.name.cmp(&b.name));
    records.retain(|r| r.name != EXCLUDED_PARK_NAME);

    let mut seen = HashSet::new();
    records.retain(|r| {
        let first = seen.insert(r.id.clone());
        if !first {
            warn!(id = %r.id, name = %r.name, "duplicate park id in registry, dropping");
        }
        first
    });
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(csv: &str) -> Result<Vec<RegistryRecord>, TrackerError> {
        read_registry(Dataset::from_reader("national_parks.csv", csv.as_bytes())?)
    }

    #[test]
    fn projects_renames_and_sorts_by_name() {
        let parks = read(
            "UNIT_CODE,UNIT_NAME,STATE,REGION\n\
             ZION,Zion National Park,UT,IM\n\
             ACAD,Acadia National Park,ME,NE\n\
             ARCH,Arches National Park,UT,IM\n",
        )
        .unwrap();
        let names: Vec<&str> = parks.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            ["Acadia National Park", "Arches National Park", "Zion National Park"]
        );
        assert_eq!(parks[0].id, "ACAD");
        assert_eq!(parks[0].state, "ME");
    }

    #[test]
    fn sort_is_case_sensitive_ordinal() {
        let parks = normalize_registry(vec![
            RegistryRecord {
                id: "B".into(),
                name: "acadia".into(),
                state: "ME".into(),
            },
            RegistryRecord {
                id: "A".into(),
                name: "Zion".into(),
                state: "UT".into(),
            },
        ]);
        assert_eq!(parks[0].name, "Zion");
        assert_eq!(parks[1].name, "acadia");
    }

    #[test]
    fn drops_american_samoa() {
        let parks = read(
            "UNIT_CODE,UNIT_NAME,STATE\n\
             NPSA,National Park of American Samoa,AS\n\
             ZION,Zion National Park,UT\n",
        )
        .unwrap();
        assert_eq!(parks.len(), 1);
        assert!(parks.iter().all(|p| p.name != EXCLUDED_PARK_NAME));
    }

    #[test]
    fn repeated_ids_keep_first_in_name_order() {
        let parks = read(
            "UNIT_CODE,UNIT_NAME,STATE\n\
             DUPE,Zeta,UT\n\
             DUPE,Alpha,CA\n",
        )
        .unwrap();
        assert_eq!(parks.len(), 1);
        assert_eq!(parks[0].name, "Alpha");
    }

    #[test]
    fn missing_state_column_fails_with_schema_error() {
        let err = read("UNIT_CODE,UNIT_NAME\nZION,Zion\n").unwrap_err();
        assert!(matches!(err, TrackerError::Schema { ref column, .. } if column == "STATE"));
    }
}
