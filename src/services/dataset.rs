use crate::domain::errors::TrackerError;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// A CSV table with a header row. Columns are resolved by name so extra or
/// reordered columns in the source files do not matter.
pub struct Dataset<R: Read> {
    path: PathBuf,
    reader: csv::Reader<R>,
    headers: csv::StringRecord,
}

/// One data row plus the source line it came from (for error messages).
pub struct Row {
    pub line: u64,
    record: csv::StringRecord,
}

impl Row {
    pub fn get(&self, column: usize) -> &str {
        self.record.get(column).unwrap_or_default()
    }
}

impl Dataset<File> {
    pub fn open(path: &Path) -> Result<Self, TrackerError> {
        let file = File::open(path).map_err(|e| TrackerError::DatasetRead {
            file: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_reader(path, file)
    }
}

impl<R: Read> Dataset<R> {
    pub fn from_reader(path: impl AsRef<Path>, source: R) -> Result<Self, TrackerError> {
        let path = path.as_ref().to_path_buf();
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(source);
        let headers = reader
            .headers()
            .map_err(|e| TrackerError::DatasetRead {
                file: path.clone(),
                reason: e.to_string(),
            })?
            .clone();
        Ok(Self {
            path,
            reader,
            headers,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn column(&self, name: &str) -> Result<usize, TrackerError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| TrackerError::Schema {
                file: self.path.clone(),
                column: name.to_string(),
            })
    }

    /// Resolves every name up front so a missing column fails before any row is read.
    pub fn columns<const N: usize>(&self, names: [&str; N]) -> Result<[usize; N], TrackerError> {
        let mut out = [0usize; N];
        for (slot, name) in out.iter_mut().zip(names) {
            *slot = self.column(name)?;
        }
        Ok(out)
    }

    pub fn rows(&mut self) -> Result<Vec<Row>, TrackerError> {
        let mut out = Vec::new();
        for result in self.reader.records() {
            let record = result.map_err(|e| TrackerError::DatasetRead {
                file: self.path.clone(),
                reason: e.to_string(),
            })?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            out.push(Row { line, record });
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_columns_by_name_in_any_order() {
        let csv = "STATE,extra,UNIT_CODE\nUT,x,ZION\n";
        let mut ds = Dataset::from_reader("parks.csv", csv.as_bytes()).unwrap();
        let [state, code] = ds.columns(["STATE", "UNIT_CODE"]).unwrap();
        let rows = ds.rows().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get(code), "ZION");
        assert_eq!(rows[0].get(state), "UT");
        assert_eq!(rows[0].line, 2);
    }

    #[test]
    fn missing_column_is_schema_error() {
        let ds = Dataset::from_reader("parks.csv", "UNIT_CODE\nZION\n".as_bytes()).unwrap();
        let err = ds.column("UNIT_NAME").unwrap_err();
        assert_eq!(err.code(), "SCHEMA_ERROR");
        assert!(err.to_string().contains("UNIT_NAME"));
    }

    #[test]
    fn ragged_row_is_read_error() {
        let mut ds = Dataset::from_reader("parks.csv", "a,b\n1,2\n3\n".as_bytes()).unwrap();
        let err = ds.rows().err().expect("ragged row must fail");
        assert_eq!(err.code(), "DATASET_READ_ERROR");
    }
}
