use crate::domain::errors::TrackerError;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Durable set of visited park ids backed by one JSON array file.
///
/// The file is rewritten in full on every [`VisitedStore::replace`]; after a
/// successful call the file and the in-memory set hold the same ids.
#[derive(Debug)]
pub struct VisitedStore {
    path: PathBuf,
    visited: HashSet<String>,
}

impl VisitedStore {
    /// A missing file is an empty store. A file that exists but does not hold
    /// a JSON array of strings is an error, never silently emptied.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, TrackerError> {
        let path = path.into();
        let visited = match read_ids(&path)? {
            Some(ids) => ids.into_iter().collect(),
            None => HashSet::new(),
        };
        debug!(path = %path.display(), visited = visited.len(), "opened visited store");
        Ok(Self { path, visited })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, id: &str) -> bool {
        self.visited.contains(id)
    }

    pub fn ids(&self) -> &HashSet<String> {
        &self.visited
    }

    pub fn count(&self) -> usize {
        self.visited.len()
    }

    pub fn sorted_ids(&self) -> Vec<String> {
        sorted(&self.visited)
    }

    pub fn replace<I>(&mut self, ids: I) -> Result<(), TrackerError>
    where
        I: IntoIterator<Item = String>,
    {
        let next: HashSet<String> = ids.into_iter().collect();
        write_ids(&self.path, &sorted(&next))?;
        debug!(path = %self.path.display(), visited = next.len(), "persisted visited store");
        self.visited = next;
        Ok(())
    }
}

fn sorted(ids: &HashSet<String>) -> Vec<String> {
    let mut out: Vec<String> = ids.iter().cloned().collect();
    out.sort();
    out
}

fn read_ids(path: &Path) -> Result<Option<Vec<String>>, TrackerError> {
    let load_err = |reason: String| TrackerError::StoreLoad {
        path: path.to_path_buf(),
        reason,
    };
    if !path.try_exists().map_err(|e| load_err(e.to_string()))? {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(path).map_err(|e| load_err(e.to_string()))?;
    let ids: Vec<String> = serde_json::from_str(&raw).map_err(|e| load_err(e.to_string()))?;
    Ok(Some(ids))
}

fn write_ids(path: &Path, ids: &[String]) -> Result<(), TrackerError> {
    let write_err = |reason: String| TrackerError::StoreWrite {
        path: path.to_path_buf(),
        reason,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| write_err(e.to_string()))?;
    }
    let body = serde_json::to_string_pretty(ids).map_err(|e| write_err(e.to_string()))?;
    std::fs::write(path, body).map_err(|e| write_err(e.to_string()))
}
