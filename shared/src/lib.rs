// Data model shared between the import pipeline and whatever presents its views.
pub mod models;
pub mod utils;
