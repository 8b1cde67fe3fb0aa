// Summary KPIs over the filtered record set
use serde::Serialize;
use shared::models::StoreRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics<'a> {
    pub total_sell_in: f64,
    pub total_sell_out: f64,
    pub avg_ticket: f64,
    pub stores_count: usize,
    pub zero_sell_in_count: usize,
    pub zero_sell_in: Vec<&'a StoreRecord>,
}

pub fn compute_metrics<'a>(filtered: &[&'a StoreRecord]) -> DashboardMetrics<'a> {
    let total_sell_in = filtered.iter().map(|r| r.sell_in).sum();
    let total_sell_out = filtered.iter().map(|r| r.sell_out).sum();
    let avg_ticket = if filtered.is_empty() {
        0.0
    } else {
        filtered.iter().map(|r| r.avg_ticket).sum::<f64>() / filtered.len() as f64
    };
    let zero_sell_in: Vec<&StoreRecord> = filtered
        .iter()
        .copied()
        .filter(|r| r.sell_in == 0.0)
        .collect();

    DashboardMetrics {
        total_sell_in,
        total_sell_out,
        avg_ticket,
        stores_count: filtered.len(),
        zero_sell_in_count: zero_sell_in.len(),
        zero_sell_in,
    }
}
