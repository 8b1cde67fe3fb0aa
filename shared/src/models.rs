use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Header labels of the store sales sheet, exactly as they appear in the source file.
pub mod columns {
    pub const STORE_NAME: &str = "NOME DA LOJA";
    pub const TARGET_SELL_IN: &str = "META SELL-IN";
    pub const SELL_IN: &str = "VL. SELL-IN";
    pub const PCT_IN: &str = "% IN";
    pub const TARGET_SELL_OUT: &str = "META SELL-OUT";
    pub const SELL_OUT: &str = "VL. SELL-OUT";
    pub const PCT_OUT: &str = "% OUT";
    pub const PCT_BRAND_MIX: &str = "% HVN";
    pub const TRANSACTION_COUNT: &str = "TC";
    pub const AVG_TICKET: &str = "TM";
    pub const SECONDARY_CHANNEL: &str = "VL. IFOOD";

    pub const ALL: [&str; 11] = [
        STORE_NAME,
        TARGET_SELL_IN,
        SELL_IN,
        PCT_IN,
        TARGET_SELL_OUT,
        SELL_OUT,
        PCT_OUT,
        PCT_BRAND_MIX,
        TRANSACTION_COUNT,
        AVG_TICKET,
        SECONDARY_CHANNEL,
    ];
}

/// One untyped cell as handed over by the row extractor.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawValue {
    Number(f64),
    Text(String),
    #[default]
    Empty,
}

impl RawValue {
    pub fn is_empty(&self) -> bool {
        match self {
            RawValue::Empty => true,
            RawValue::Text(s) => s.is_empty(),
            RawValue::Number(_) => false,
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

// Total conversion: anything that is not a number or a string keeps its JSON text,
// which the normalizer later degrades to zero.
impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => RawValue::Empty,
            serde_json::Value::Number(n) => n.as_f64().map_or(RawValue::Empty, RawValue::Number),
            serde_json::Value::String(s) => RawValue::Text(s),
            other => RawValue::Text(other.to_string()),
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(n) => write!(f, "{}", n),
            RawValue::Text(s) => f.write_str(s),
            RawValue::Empty => Ok(()),
        }
    }
}

/// A source row keyed by column label. Labels that are absent read as `RawValue::Empty`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: HashMap<String, RawValue>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, label: &str, value: impl Into<RawValue>) -> Self {
        self.insert(label, value);
        self
    }

    pub fn insert(&mut self, label: &str, value: impl Into<RawValue>) {
        self.cells.insert(label.to_string(), value.into());
    }

    pub fn get(&self, label: &str) -> &RawValue {
        static EMPTY: RawValue = RawValue::Empty;
        self.cells.get(label).unwrap_or(&EMPTY)
    }
}

impl FromIterator<(String, RawValue)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (String, RawValue)>>(iter: I) -> Self {
        RawRow {
            cells: iter.into_iter().collect(),
        }
    }
}

/// Fixed sell-out performance band. Serialized as the integers 1..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Quartile {
    Q1 = 1,
    Q2 = 2,
    Q3 = 3,
    Q4 = 4,
}

impl Quartile {
    pub const ALL: [Quartile; 4] = [Quartile::Q1, Quartile::Q2, Quartile::Q3, Quartile::Q4];

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Quartile::Q1 => "Q1 (≤50k)",
            Quartile::Q2 => "Q2 (50k-80k)",
            Quartile::Q3 => "Q3 (80k-100k)",
            Quartile::Q4 => "Q4 (>100k)",
        }
    }
}

impl From<Quartile> for u8 {
    fn from(q: Quartile) -> Self {
        q.as_u8()
    }
}

impl TryFrom<u8> for Quartile {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Quartile::Q1),
            2 => Ok(Quartile::Q2),
            3 => Ok(Quartile::Q3),
            4 => Ok(Quartile::Q4),
            other => Err(format!("quartile must be between 1 and 4, got {}", other)),
        }
    }
}

impl fmt::Display for Quartile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.as_u8())
    }
}

/// A normalized store row. Built once per import and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRecord {
    pub id: String,
    pub name: String,
    pub target_sell_in: f64,
    pub sell_in: f64,
    pub pct_in: f64,
    pub target_sell_out: f64,
    pub sell_out: f64,
    pub pct_out: f64,
    pub pct_brand_mix: f64,
    pub transaction_count: f64,
    pub avg_ticket: f64,
    pub secondary_channel_value: f64,
    pub quartile: Quartile,
}

/// Caller-owned filter state for the aggregation views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QueryState {
    pub search: String,
    pub quartile: Option<Quartile>,
}

impl QueryState {
    pub fn new(search: impl Into<String>, quartile: Option<Quartile>) -> Self {
        Self {
            search: search.into(),
            quartile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_row_missing_label_is_empty() {
        let row = RawRow::new().with(columns::STORE_NAME, "Loja Centro");
        assert_eq!(row.get(columns::SELL_OUT), &RawValue::Empty);
        assert_eq!(row.get(columns::STORE_NAME), &RawValue::Text("Loja Centro".to_string()));
    }

    #[test]
    fn test_raw_value_from_json() {
        assert_eq!(RawValue::from(serde_json::json!(null)), RawValue::Empty);
        assert_eq!(RawValue::from(serde_json::json!(12.5)), RawValue::Number(12.5));
        assert_eq!(RawValue::from(serde_json::json!("R$ 1,00")), RawValue::Text("R$ 1,00".into()));
        assert_eq!(RawValue::from(serde_json::json!(true)), RawValue::Text("true".into()));
    }

    #[test]
    fn test_quartile_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Quartile::Q3).unwrap(), "3");
        let q: Quartile = serde_json::from_str("4").unwrap();
        assert_eq!(q, Quartile::Q4);
        assert!(serde_json::from_str::<Quartile>("5").is_err());
    }

    #[test]
    fn test_quartile_ordering() {
        assert!(Quartile::Q4 > Quartile::Q1);
        assert_eq!(Quartile::try_from(2).unwrap(), Quartile::Q2);
        assert!(Quartile::try_from(0).is_err());
    }
}
