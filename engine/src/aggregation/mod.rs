//! Derived views over a normalized record set.
//!
//! Everything here is a pure function of `(records, query)`: nothing is cached and the
//! record slice is only read. Filtered views (table, KPIs, rankings, comparison series)
//! see the records matching the query; the quartile distribution always covers the
//! whole dataset.

pub mod metrics;
pub mod rankings;

use crate::config::EngineSettings;
use serde::Serialize;
use shared::models::{Quartile, QueryState, StoreRecord};
use std::cmp::Ordering;

pub use metrics::{compute_metrics, DashboardMetrics};
pub use rankings::{Ranking, TopAvgTicket, TopSellOut};

/// Records whose name contains the search text (case-insensitive) and, when set,
/// whose quartile equals the filter.
pub fn filter_records<'a>(records: &'a [StoreRecord], query: &QueryState) -> Vec<&'a StoreRecord> {
    let needle = query.search.to_lowercase();
    records
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .filter(|r| query.quartile.map_or(true, |q| r.quartile == q))
        .collect()
}

/// Table order: quartile 4 -> 1, then sell-out descending. Full ties keep input order.
pub fn sorted_table<'a>(filtered: &[&'a StoreRecord]) -> Vec<&'a StoreRecord> {
    let mut table = filtered.to_vec();
    table.sort_by(|a, b| {
        b.quartile
            .cmp(&a.quartile)
            .then_with(|| cmp_desc(a.sell_out, b.sell_out))
    });
    table
}

/// Filtered records by sell-out descending, for the sell-in vs sell-out comparison chart.
pub fn comparison_series<'a>(filtered: &[&'a StoreRecord]) -> Vec<&'a StoreRecord> {
    sort_desc_by(filtered, |r| r.sell_out)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionBucket {
    pub quartile: Quartile,
    pub label: &'static str,
    pub count: usize,
}

/// Store count per band over the full dataset, in band order Q1..Q4.
pub fn distribution(records: &[StoreRecord]) -> Vec<DistributionBucket> {
    let mut counts = [0usize; 4];
    for record in records {
        counts[record.quartile.as_u8() as usize - 1] += 1;
    }
    Quartile::ALL
        .iter()
        .zip(counts)
        .map(|(&quartile, count)| DistributionBucket {
            quartile,
            label: quartile.label(),
            count,
        })
        .collect()
}

/// Every view the dashboard needs for one `(records, query)` pair.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView<'a> {
    pub filtered_count: usize,
    pub table: Vec<&'a StoreRecord>,
    pub table_truncated: bool,
    pub metrics: DashboardMetrics<'a>,
    pub top_sell_out: Vec<&'a StoreRecord>,
    pub top_avg_ticket: Vec<&'a StoreRecord>,
    pub distribution: Vec<DistributionBucket>,
    pub comparison: Vec<&'a StoreRecord>,
}

pub fn compute_view<'a>(
    records: &'a [StoreRecord],
    query: &QueryState,
    settings: &EngineSettings,
) -> DashboardView<'a> {
    let filtered = filter_records(records, query);
    tracing::debug!(
        total = records.len(),
        filtered = filtered.len(),
        search = %query.search,
        quartile = ?query.quartile,
        "Computing dashboard views"
    );

    let mut table = sorted_table(&filtered);
    let table_truncated = match settings.table_page_size {
        Some(page) if table.len() > page => {
            table.truncate(page);
            true
        }
        _ => false,
    };

    DashboardView {
        filtered_count: filtered.len(),
        table,
        table_truncated,
        metrics: compute_metrics(&filtered),
        top_sell_out: TopSellOut::new(settings.top_sell_out_limit).rank(&filtered),
        top_avg_ticket: TopAvgTicket::new(settings.top_ticket_limit).rank(&filtered),
        distribution: distribution(records),
        comparison: comparison_series(&filtered),
    }
}

// Descending order on f64 keys. Signed zeros compare equal so they stay in input order.
fn cmp_desc(a: f64, b: f64) -> Ordering {
    let unsign = |v: f64| if v == 0.0 { 0.0 } else { v };
    unsign(b).total_cmp(&unsign(a))
}

// Stable descending sort on an f64 key.
pub(crate) fn sort_desc_by<'a, F>(records: &[&'a StoreRecord], key: F) -> Vec<&'a StoreRecord>
where
    F: Fn(&StoreRecord) -> f64,
{
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| cmp_desc(key(a), key(b)));
    sorted
}
