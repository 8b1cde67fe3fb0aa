// Engine library root
// Import pipeline (normalizer -> classifier -> transformer) and the aggregation views
// built on top of the normalized store records.

pub mod aggregation;
pub mod classifier;
pub mod config;
pub mod data;
pub mod error;
pub mod normalizer;
pub mod report;
pub mod transformer;

pub use aggregation::{compute_view, DashboardView};
pub use classifier::classify;
pub use error::EngineError;
pub use normalizer::normalize;
pub use transformer::transform;
