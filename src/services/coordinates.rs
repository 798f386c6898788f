use crate::domain::constants::{
    CODE_OVERRIDES, COORDS_CODE_COLUMN, COORDS_LAT_COLUMN, COORDS_LON_COLUMN, COORDS_TYPE_COLUMN,
    COORDS_UNIT_COLUMN, MISSING_VALUE_TOKENS, NATIONAL_PARK_TYPE,
};
use crate::domain::errors::TrackerError;
use crate::domain::models::{CoordinateRecord, Coordinates};
use crate::services::dataset::Dataset;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// A `National Park` row of the coordinate registry before key correction.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateRow {
    pub unit: String,
    pub code: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

pub fn load_coordinates(path: &Path) -> Result<Vec<CoordinateRecord>, TrackerError> {
    read_coordinates(Dataset::open(path)?)
}

pub fn read_coordinates<R: Read>(
    mut ds: Dataset<R>,
) -> Result<Vec<CoordinateRecord>, TrackerError> {
    let [kind, unit, code, lat, lon] = ds.columns([
        COORDS_TYPE_COLUMN,
        COORDS_UNIT_COLUMN,
        COORDS_CODE_COLUMN,
        COORDS_LAT_COLUMN,
        COORDS_LON_COLUMN,
    ])?;

    let mut kept = Vec::new();
    let rows = ds.rows()?;
    for row in rows.iter().filter(|r| r.get(kind) == NATIONAL_PARK_TYPE) {
        kept.push(CoordinateRow {
            unit: row.get(unit).to_string(),
            code: row.get(code).to_string(),
            lat: parse_degrees(ds.path(), row.line, COORDS_LAT_COLUMN, row.get(lat))?,
            lon: parse_degrees(ds.path(), row.line, COORDS_LON_COLUMN, row.get(lon))?,
        });
    }
    debug!(
        file = %ds.path().display(),
        rows = rows.len(),
        national_parks = kept.len(),
        "read coordinate registry"
    );
    Ok(reconcile(kept))
}

/// Sorts by unit name, applies the code overrides and keys rows by code.
pub fn reconcile(mut rows: Vec<CoordinateRow>) -> Vec<CoordinateRecord> {
    rows.sort_by(|a, b| a.unit.cmp(&b.unit));
    rows.into_iter()
        .map(|row| CoordinateRecord {
            id: corrected_code(&row.unit, &row.code).to_string(),
            position: row.lat.zip(row.lon).map(|(lat, lon)| Coordinates { lat, lon }),
        })
        .collect()
}

pub fn corrected_code<'a>(unit: &str, code: &'a str) -> &'a str {
    CODE_OVERRIDES
        .iter()
        .find(|(u, _)| *u == unit)
        .map(|(_, fixed)| *fixed)
        .unwrap_or(code)
}

/// Blank cells, NA tokens and non-finite numbers are a missing coordinate;
/// any other non-numeric text is an error.
fn parse_degrees(
    file: &Path,
    line: u64,
    column: &str,
    raw: &str,
) -> Result<Option<f64>, TrackerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || MISSING_VALUE_TOKENS.contains(&trimmed) {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(|v| v.is_finite().then_some(v))
        .map_err(|_| TrackerError::InvalidValue {
            file: file.to_path_buf(),
            line,
            column: column.to_string(),
            value: raw.to_string(),
        })
}
