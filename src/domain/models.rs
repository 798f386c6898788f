use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Registry row after normalization; a `Park` without coordinates yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryRecord {
    pub id: String,
    pub name: String,
    pub state: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Reconciled coordinate row, keyed by the (corrected) registry code.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateRecord {
    pub id: String,
    pub position: Option<Coordinates>,
}

/// Canonical park entity. Latitude and longitude are either both known or both
/// absent, hence the single optional `position`.
#[derive(Debug, Clone, PartialEq)]
pub struct Park {
    pub id: String,
    pub name: String,
    pub state: String,
    pub position: Option<Coordinates>,
}

impl Park {
    pub fn lat(&self) -> Option<f64> {
        self.position.map(|p| p.lat)
    }

    pub fn lon(&self) -> Option<f64> {
        self.position.map(|p| p.lon)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub search_text: String,
    pub unvisited_only: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewRow {
    pub id: String,
    pub name: String,
    pub state: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub visited: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Summary {
    pub visited_count: usize,
    pub total_count: usize,
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewReport {
    pub rows: Vec<ViewRow>,
    pub summary: Summary,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JoinGap {
    pub id: String,
    pub name: String,
    pub state: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VisitedItem {
    pub id: String,
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub parks: usize,
    pub with_coordinates: usize,
    pub gaps: usize,
    pub visited: usize,
    pub unknown_visited: Vec<String>,
}
