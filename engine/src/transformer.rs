// Raw spreadsheet rows -> normalized store records
use crate::classifier::classify;
use crate::normalizer::normalize_checked;
use shared::models::{columns, RawRow, RawValue, StoreRecord};
use tracing::warn;

/// Maps every row to one `StoreRecord`, preserving order. Ids are positional (`store-{i}`),
/// so they are only stable within a single run.
pub fn transform(rows: &[RawRow]) -> Vec<StoreRecord> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| transform_row(index, row))
        .collect()
}

fn transform_row(index: usize, row: &RawRow) -> StoreRecord {
    let field = |label: &str| numeric_cell(index, row, label);
    let sell_out = field(columns::SELL_OUT);

    StoreRecord {
        id: format!("store-{}", index),
        name: store_name(index, row.get(columns::STORE_NAME)),
        target_sell_in: field(columns::TARGET_SELL_IN),
        sell_in: field(columns::SELL_IN),
        pct_in: field(columns::PCT_IN),
        target_sell_out: field(columns::TARGET_SELL_OUT),
        sell_out,
        pct_out: field(columns::PCT_OUT),
        pct_brand_mix: field(columns::PCT_BRAND_MIX),
        transaction_count: field(columns::TRANSACTION_COUNT),
        avg_ticket: field(columns::AVG_TICKET),
        secondary_channel_value: field(columns::SECONDARY_CHANNEL),
        quartile: classify(sell_out),
    }
}

fn store_name(index: usize, value: &RawValue) -> String {
    if value.is_empty() {
        format!("Loja {}", index + 1)
    } else {
        value.to_string()
    }
}

fn numeric_cell(index: usize, row: &RawRow, label: &str) -> f64 {
    let value = row.get(label);
    match normalize_checked(value) {
        Some(n) => n,
        None => {
            warn!(row = index, column = label, value = %value, "Unparseable numeric cell, using 0");
            0.0
        }
    }
}
