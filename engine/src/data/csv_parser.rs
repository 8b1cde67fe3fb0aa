use crate::error::EngineError;
use csv::{ByteRecord, ReaderBuilder};
use shared::models::{columns, RawRow, RawValue};
use std::borrow::Cow;
use std::io::Read;

pub struct SalesCsvParser {
    delimiter: u8,
}

impl SalesCsvParser {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    // CSV Header: NOME DA LOJA;META SELL-IN;VL. SELL-IN;% IN;META SELL-OUT;VL. SELL-OUT;% OUT;% HVN;TC;TM;VL. IFOOD
    // Example Row: Loja Centro;R$ 80.000,00;R$ 75.500,00;94,4;R$ 95.000,00;R$ 90.000,00;94,7;38,2;1.730;R$ 52,02;R$ 4.120,00
    // Every cell is kept as text; numeric interpretation happens in the normalizer.
    pub fn read_rows<R: Read>(&self, reader: R) -> Result<Vec<RawRow>, EngineError> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true) // Short rows are allowed, missing cells read as empty
            .from_reader(reader);

        // Byte records: exports saved as Windows-1252 must not abort the import on one cell.
        let headers: Vec<String> = rdr
            .byte_headers()?
            .iter()
            .map(|h| {
                Self::decode_cell(h, 1, "header")
                    .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
                    .to_string()
            })
            .collect();
        for label in columns::ALL {
            if !headers.iter().any(|h| h == label) {
                tracing::warn!(column = label, "Expected column not found in CSV header, using defaults");
            }
        }

        let mut rows = Vec::new();

        for (idx, result) in rdr.byte_records().enumerate() {
            let line = idx + 2;
            let record = result.map_err(|e| {
                EngineError::AnyhowError(anyhow::anyhow!(
                    "Error reading CSV record at line {}: {}",
                    line,
                    e
                ))
            })?;
            if Self::is_blank(&record) {
                continue;
            }
            rows.push(Self::to_raw_row(&headers, &record, line));
        }
        Ok(rows)
    }

    fn to_raw_row(headers: &[String], record: &ByteRecord, line: usize) -> RawRow {
        headers
            .iter()
            .zip(record.iter())
            .filter(|(header, _)| !header.is_empty())
            .map(|(header, cell)| {
                let text = Self::decode_cell(cell, line, header);
                (header.clone(), RawValue::Text(text.into_owned()))
            })
            .collect()
    }

    // Invalid UTF-8 is replaced with U+FFFD instead of failing the row.
    fn decode_cell<'a>(cell: &'a [u8], line: usize, column: &str) -> Cow<'a, str> {
        let text = String::from_utf8_lossy(cell);
        if let Cow::Owned(_) = text {
            tracing::warn!(line, column, value = %text, "CSV cell is not valid UTF-8, invalid bytes replaced");
        }
        text
    }

    // Spreadsheet exports often end with rows of empty separators.
    fn is_blank(record: &ByteRecord) -> bool {
        record.iter().all(|cell| cell.trim_ascii().is_empty())
    }
}

impl Default for SalesCsvParser {
    fn default() -> Self {
        Self::new(b';')
    }
}
