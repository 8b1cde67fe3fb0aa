// Row extraction: reads an exported sales sheet into raw rows and hands them to the transformer.
pub mod csv_parser;
pub mod dataset;
pub mod json_rows;

use crate::config::EngineSettings;
use crate::error::EngineError;
use crate::transformer::transform;
use csv_parser::SalesCsvParser;
use dataset::StoreDataset;
use shared::models::{RawRow, StoreRecord};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Result<Self, EngineError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("csv") | Some("txt") => Ok(InputFormat::Csv),
            Some("json") => Ok(InputFormat::Json),
            _ => Err(EngineError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

pub fn read_rows(path: &Path, settings: &EngineSettings) -> Result<Vec<RawRow>, EngineError> {
    let format = InputFormat::from_path(path)?;
    let file = File::open(path).map_err(|source| EngineError::IoError {
        path: path.display().to_string(),
        source,
    })?;
    let reader = BufReader::new(file);

    match format {
        InputFormat::Csv => SalesCsvParser::new(settings.delimiter_byte()?).read_rows(reader),
        InputFormat::Json => json_rows::read_rows(reader),
    }
}

/// Reads and normalizes one file. A file without data rows is an `EmptyImport` error.
pub fn import_file(path: &Path, settings: &EngineSettings) -> Result<Vec<StoreRecord>, EngineError> {
    let rows = read_rows(path, settings)?;
    if rows.is_empty() {
        return Err(EngineError::EmptyImport(path.display().to_string()));
    }
    let records = transform(&rows);
    info!(path = %path.display(), rows = records.len(), "Imported store sales");
    Ok(records)
}

/// Imports `path` and swaps it into `dataset`. On error the previous records stay in place.
pub fn import_into(
    dataset: &mut StoreDataset,
    path: &Path,
    settings: &EngineSettings,
) -> Result<usize, EngineError> {
    let records = import_file(path, settings)?;
    let count = records.len();
    dataset.replace(&path.display().to_string(), records);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Quartile;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn create_test_file(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        writeln!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(InputFormat::from_path(Path::new("vendas.CSV")).unwrap(), InputFormat::Csv);
        assert_eq!(InputFormat::from_path(Path::new("vendas.json")).unwrap(), InputFormat::Json);
        assert!(matches!(
            InputFormat::from_path(Path::new("vendas.xlsx")),
            Err(EngineError::UnsupportedFormat(_))
        ));
        assert!(InputFormat::from_path(Path::new("vendas")).is_err());
    }

    #[test]
    fn test_import_csv_file() {
        let file = create_test_file(
            ".csv",
            "\
NOME DA LOJA;VL. SELL-IN;VL. SELL-OUT;TM
A;R$ 10.000,00;R$ 90.000,00;R$ 50,00
B;0;40000;30",
        );
        let records = import_file(file.path(), &EngineSettings::default()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sell_out, 90000.0);
        assert_eq!(records[0].quartile, Quartile::Q3);
        assert_eq!(records[1].quartile, Quartile::Q1);
        assert_eq!(records[1].id, "store-1");
    }

    #[test]
    fn test_import_json_file() {
        let file = create_test_file(
            ".json",
            r#"[{"NOME DA LOJA": "A", "VL. SELL-OUT": 120000.5}, {"VL. SELL-OUT": "R$ 60.000,00"}]"#,
        );
        let records = import_file(file.path(), &EngineSettings::default()).unwrap();
        assert_eq!(records[0].quartile, Quartile::Q4);
        assert_eq!(records[1].name, "Loja 2");
        assert_eq!(records[1].quartile, Quartile::Q2);
    }

    #[test]
    fn test_import_header_only_is_empty_import() {
        let file = create_test_file(".csv", "NOME DA LOJA;VL. SELL-OUT");
        let err = import_file(file.path(), &EngineSettings::default()).unwrap_err();
        assert!(matches!(err, EngineError::EmptyImport(_)));
    }

    #[test]
    fn test_import_missing_file() {
        let err = import_file(Path::new("/nonexistent/vendas.csv"), &EngineSettings::default()).unwrap_err();
        assert!(matches!(err, EngineError::IoError { .. }));
        assert!(err.to_string().contains("/nonexistent/vendas.csv"));
    }

    #[test]
    fn test_failed_import_keeps_previous_dataset() {
        let good = create_test_file(".json", r#"[{"NOME DA LOJA": "A", "VL. SELL-OUT": 1}]"#);
        let empty = create_test_file(".json", "[]");
        let settings = EngineSettings::default();

        let mut dataset = StoreDataset::new();
        assert_eq!(import_into(&mut dataset, good.path(), &settings).unwrap(), 1);
        assert!(import_into(&mut dataset, empty.path(), &settings).is_err());
        assert_eq!(dataset.records().len(), 1);
        assert_eq!(dataset.records()[0].name, "A");
    }
}
