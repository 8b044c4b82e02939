#![forbid(unsafe_code)]

//! `pedigree` draws fulcrum-centered family diagrams without a GUI toolkit.
//!
//! A view is centered on one person (the fulcrum): their parents' ancestry above, their siblings
//! beside them, their spouses and descendants below. Selecting any other person rebuilds the
//! whole view around them; see [`Diagram`].
//!
//! The pipeline is [`build`] → [`render::measure_graph`] → [`layout::layout`]. [`render_view`]
//! runs it once; [`Diagram`] keeps the current view and re-runs it on every fulcrum change.

pub use pedigree_core::*;

mod diagram;

pub use diagram::{Diagram, render_view};

pub mod layout {
    pub use pedigree_layout::{LayoutOptions, VERSION, arrange, derive_lines, layout};
}

pub mod render {
    pub use pedigree_render::model::{
        AncestorLayout, CardLayout, ChainLayout, LineLayout, PedigreeLayout, UnitLayout,
    };
    pub use pedigree_render::{
        CardStyle, DeterministicTextMeasurer, TextMeasurer, TextMetrics, TextStyle, card_label,
        measure_graph,
    };
}

#[derive(Debug, thiserror::Error)]
pub enum HeadlessError {
    #[error(transparent)]
    Record(#[from] pedigree_core::Error),
    #[error(transparent)]
    Layout(#[from] pedigree_layout::Error),
    #[error(transparent)]
    Snapshot(#[from] pedigree_render::Error),
}

impl HeadlessError {
    /// The selected person is not in the record.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Record(pedigree_core::Error::NotFound { .. }))
    }
}

pub type HeadlessResult<T> = std::result::Result<T, HeadlessError>;
