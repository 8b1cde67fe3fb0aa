// Top-N rankings over the filtered record set
use super::sort_desc_by;
use shared::models::StoreRecord;

// Common trait for all rankings
pub trait Ranking {
    fn limit(&self) -> usize;
    fn key(&self, record: &StoreRecord) -> f64;

    /// Highest `limit` records by `key`, descending. Equal keys keep input order.
    fn rank<'a>(&self, records: &[&'a StoreRecord]) -> Vec<&'a StoreRecord> {
        let mut ranked = sort_desc_by(records, |r| self.key(r));
        ranked.truncate(self.limit());
        ranked
    }
}

pub struct TopSellOut {
    limit: usize,
}

impl TopSellOut {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Default for TopSellOut {
    fn default() -> Self {
        Self::new(15)
    }
}

impl Ranking for TopSellOut {
    fn limit(&self) -> usize {
        self.limit
    }

    fn key(&self, record: &StoreRecord) -> f64 {
        record.sell_out
    }
}

pub struct TopAvgTicket {
    limit: usize,
}

impl TopAvgTicket {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Default for TopAvgTicket {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Ranking for TopAvgTicket {
    fn limit(&self) -> usize {
        self.limit
    }

    fn key(&self, record: &StoreRecord) -> f64 {
        record.avg_ticket
    }
}
