#![forbid(unsafe_code)]

//! Presentation-side support for pedigree diagrams: label measurement (the sizing callback) and
//! serializable snapshots of arranged views. Drawing itself is left to the host toolkit.

pub mod measure;
pub mod model;
pub mod text;

pub use measure::{CardStyle, card_label, measure_graph};
pub use model::PedigreeLayout;
pub use text::{DeterministicTextMeasurer, TextMeasurer, TextMetrics, TextStyle};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("layout snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
