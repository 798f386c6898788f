use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum TrackerError {
    #[error("schema error: {file} is missing required column `{column}`")]
    Schema { file: PathBuf, column: String },
    #[error("cannot read dataset {file}: {reason}")]
    DatasetRead { file: PathBuf, reason: String },
    #[error("invalid value in {file} line {line}, column `{column}`: {value:?}")]
    InvalidValue {
        file: PathBuf,
        line: u64,
        column: String,
        value: String,
    },
    #[error("cannot load visited store {path}: {reason}")]
    StoreLoad { path: PathBuf, reason: String },
    #[error("cannot write visited store {path}: {reason}")]
    StoreWrite { path: PathBuf, reason: String },
    #[error("invalid config {path}: {reason}")]
    Config { path: PathBuf, reason: String },
}

impl TrackerError {
    /// Stable code used in the `--json` error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            TrackerError::Schema { .. } => "SCHEMA_ERROR",
            TrackerError::DatasetRead { .. } => "DATASET_READ_ERROR",
            TrackerError::InvalidValue { .. } => "INVALID_VALUE",
            TrackerError::StoreLoad { .. } => "STORE_LOAD_ERROR",
            TrackerError::StoreWrite { .. } => "STORE_WRITE_ERROR",
            TrackerError::Config { .. } => "CONFIG_ERROR",
        }
    }
}

/// Maps any command failure to an envelope code; untyped failures are `INTERNAL`.
pub fn error_code(err: &anyhow::Error) -> &'static str {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<TrackerError>())
        .map(TrackerError::code)
        .unwrap_or("INTERNAL")
}
