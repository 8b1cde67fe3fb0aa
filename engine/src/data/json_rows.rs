// Rows exported from a spreadsheet as a JSON array of objects (one object per sheet row)
use crate::error::EngineError;
use serde_json::Value;
use shared::models::{RawRow, RawValue};
use std::io::Read;

pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RawRow>, EngineError> {
    let document: Value = serde_json::from_reader(reader)?;
    let items = match document {
        Value::Array(items) => items,
        other => {
            return Err(EngineError::RowShapeError(format!(
                "found {} at top level",
                json_kind(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| match item {
            Value::Object(map) => Ok(map
                .into_iter()
                .map(|(label, value)| (label, RawValue::from(value)))
                .collect::<RawRow>()),
            other => Err(EngineError::RowShapeError(format!(
                "row {} is {}",
                idx,
                json_kind(&other)
            ))),
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::columns;

    #[test]
    fn test_values_keep_their_json_type() {
        let json = r#"[
            {"NOME DA LOJA": "A", "VL. SELL-OUT": "R$ 90.000,00", "TM": 52.5},
            {"NOME DA LOJA": "B", "VL. SELL-OUT": 40000, "TM": null}
        ]"#;
        let rows = read_rows(json.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get(columns::SELL_OUT), &RawValue::Text("R$ 90.000,00".into()));
        assert_eq!(rows[0].get(columns::AVG_TICKET), &RawValue::Number(52.5));
        assert_eq!(rows[1].get(columns::SELL_OUT), &RawValue::Number(40000.0));
        assert_eq!(rows[1].get(columns::AVG_TICKET), &RawValue::Empty);
    }

    #[test]
    fn test_empty_array() {
        assert!(read_rows("[]".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_non_array_document() {
        let err = read_rows(r#"{"NOME DA LOJA": "A"}"#.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("an object at top level"));
    }

    #[test]
    fn test_rejects_non_object_row() {
        let err = read_rows(r#"[{"TC": 1}, 5]"#.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("row 1 is a number"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            read_rows("[{".as_bytes()),
            Err(EngineError::JsonError { .. })
        ));
    }
}
