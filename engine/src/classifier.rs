// Sell-out performance bands
use shared::models::Quartile;

/// Inclusive upper bounds of Q1, Q2 and Q3. Anything above the last one is Q4.
pub const Q1_MAX_SELL_OUT: f64 = 50_000.0;
pub const Q2_MAX_SELL_OUT: f64 = 80_000.0;
pub const Q3_MAX_SELL_OUT: f64 = 100_000.0;

pub fn classify(sell_out: f64) -> Quartile {
    if sell_out <= Q1_MAX_SELL_OUT {
        Quartile::Q1
    } else if sell_out <= Q2_MAX_SELL_OUT {
        Quartile::Q2
    } else if sell_out <= Q3_MAX_SELL_OUT {
        Quartile::Q3
    } else {
        Quartile::Q4
    }
}
