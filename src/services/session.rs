use crate::domain::errors::TrackerError;
use crate::domain::models::{
    CheckReport, JoinGap, Park, Summary, ViewQuery, ViewReport, ViewRow, VisitedItem,
};
use crate::services::config::TrackerConfig;
use crate::services::join::load_parks;
use crate::services::store::VisitedStore;
use crate::services::view::{build_view, summarize, table_rows};
use std::collections::{HashMap, HashSet};
use tracing::{info, warn};

/// One user interaction.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// Replace the visited set wholesale.
    Select(Vec<String>),
    Mark(Vec<String>),
    Unmark(Vec<String>),
    Query(ViewQuery),
}

/// Session context: the canonical parks (loaded once), the visited store and
/// the current query. Every event goes through [`Session::handle`].
pub struct Session {
    parks: Vec<Park>,
    /// Canonical id to position in `parks`.
    index: HashMap<String, usize>,
    gaps: Vec<JoinGap>,
    store: VisitedStore,
    query: ViewQuery,
}

impl Session {
    pub fn start(config: &TrackerConfig) -> Result<Self, TrackerError> {
        let joined = load_parks(&config.parks, &config.coords)?;
        let store = VisitedStore::open(&config.store)?;
        info!(store = %store.path().display(), visited = store.count(), "session started");
        let gaps = joined.gaps();
        Ok(Self::from_parts(joined.into_parks(), gaps, store))
    }

    pub fn from_parts(parks: Vec<Park>, gaps: Vec<JoinGap>, store: VisitedStore) -> Self {
        let index = parks
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
        Self {
            parks,
            index,
            gaps,
            store,
            query: ViewQuery::default(),
        }
    }

    pub fn handle(&mut self, event: SessionEvent) -> Result<ViewReport, TrackerError> {
        match event {
            SessionEvent::Select(ids) => self.replace_visited(ids.into_iter().collect())?,
            SessionEvent::Mark(ids) => {
                let mut next = self.store.ids().clone();
                next.extend(ids);
                self.replace_visited(next)?;
            }
            SessionEvent::Unmark(ids) => {
                let drop: HashSet<String> = ids.into_iter().collect();
                let next = self
                    .store
                    .ids()
                    .iter()
                    .filter(|id| !drop.contains(*id))
                    .cloned()
                    .collect();
                self.replace_visited(next)?;
            }
            SessionEvent::Query(query) => self.query = query,
        }
        Ok(self.view())
    }

    fn replace_visited(&mut self, next: HashSet<String>) -> Result<(), TrackerError> {
        self.store.replace(next)?;
        let unknown = self.unknown_visited();
        if !unknown.is_empty() {
            warn!(ids = ?unknown, "visited ids not present in the park registry");
        }
        Ok(())
    }

    pub fn view(&self) -> ViewReport {
        build_view(&self.parks, self.store.ids(), &self.query)
    }

    pub fn table(&self) -> Vec<ViewRow> {
        table_rows(&self.parks, self.store.ids())
    }

    pub fn summary(&self) -> Summary {
        summarize(self.parks.len(), self.store.ids())
    }

    pub fn gaps(&self) -> &[JoinGap] {
        &self.gaps
    }

    pub fn visited_items(&self) -> Vec<VisitedItem> {
        self.store
            .sorted_ids()
            .into_iter()
            .map(|id| {
                let name = self.park(&id).map(|p| p.name.clone());
                VisitedItem { id, name }
            })
            .collect()
    }

    pub fn unknown_visited(&self) -> Vec<String> {
        self.store
            .sorted_ids()
            .into_iter()
            .filter(|id| !self.index.contains_key(id))
            .collect()
    }

    pub fn check_report(&self) -> CheckReport {
        CheckReport {
            parks: self.parks.len(),
            with_coordinates: self.parks.len() - self.gaps.len(),
            gaps: self.gaps.len(),
            visited: self.store.count(),
            unknown_visited: self.unknown_visited(),
        }
    }

    fn park(&self, id: &str) -> Option<&Park> {
        self.index.get(id).map(|&i| &self.parks[i])
    }
}
