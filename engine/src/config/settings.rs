// Engine settings, loaded from an optional JSON file
use crate::error::EngineError;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EngineSettings {
    pub csv_delimiter: String, // Should be char, but JSON string is easier
    pub top_sell_out_limit: usize,
    pub top_ticket_limit: usize,
    pub table_page_size: Option<usize>, // None shows every row
    pub log_filter: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            csv_delimiter: ";".to_string(),
            top_sell_out_limit: 15,
            top_ticket_limit: 10,
            table_page_size: Some(50),
            log_filter: "info".to_string(),
        }
    }
}

impl EngineSettings {
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            EngineError::ConfigError(format!("cannot read '{}': {}", path.display(), e))
        })?;
        let settings: EngineSettings = serde_json::from_str(&raw).map_err(|e| {
            EngineError::ConfigError(format!("invalid settings in '{}': {}", path.display(), e))
        })?;
        settings.validate()?;
        tracing::debug!(path = %path.display(), ?settings, "Loaded engine settings");
        Ok(settings)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self, EngineError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// The CSV reader takes a single byte, so the delimiter must be exactly one ASCII char.
    pub fn delimiter_byte(&self) -> Result<u8, EngineError> {
        match self.csv_delimiter.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(EngineError::ConfigError(format!(
                "csv_delimiter must be a single ASCII character, got '{}'",
                self.csv_delimiter
            ))),
        }
    }

    fn validate(&self) -> Result<(), EngineError> {
        self.delimiter_byte()?;
        if self.table_page_size == Some(0) {
            return Err(EngineError::ConfigError(
                "table_page_size must be greater than 0 (use null for all rows)".to_string(),
            ));
        }
        Ok(())
    }
}
