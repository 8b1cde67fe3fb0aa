use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("CSV parsing system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        source: std::io::Error,
    },

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Unsupported input format for '{0}' (expected .csv, .txt or .json)")]
    UnsupportedFormat(String),

    #[error("JSON rows must be a top-level array of objects: {0}")]
    RowShapeError(String),

    // Reported by the import layer; the transformer itself accepts empty input.
    #[error("No usable rows in '{0}'")]
    EmptyImport(String),

    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}
