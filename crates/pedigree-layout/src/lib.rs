#![forbid(unsafe_code)]

//! Arrangement and connector lines for fulcrum-centered pedigree diagrams.
//!
//! Input: a [`pedigree_core::Graph`] whose cards and ancestors carry measured sizes.
//! Output: every node positioned on one canvas, plus the connector [`Line`]s.
//!
//! The pass is two-phase. Local sizing computes aggregate sizes and relative centers of units
//! and ancestry chains from the measured leaves; global placement then lays out generation rows
//! and centers every parent over the block of its children.

pub mod lines;
pub mod options;
mod place;
mod size;

pub use lines::derive_lines;
pub use options::LayoutOptions;

use pedigree_core::{Graph, Line};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("sizing callback has not measured {element}")]
    SizingNotReady { element: String },
    #[error("invalid layout options: {message}")]
    InvalidOptions { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Computes the position of every unit, card, ancestry chain and ancestor, and the canvas size.
///
/// Deterministic and idempotent: arranging an already arranged graph yields the same
/// coordinates. Lines already stored on the graph are left alone; see [`layout`].
pub fn arrange(graph: &mut Graph, options: &LayoutOptions) -> Result<()> {
    options.validate()?;
    size::check_sizes(graph)?;
    size::size_graph(graph, options);
    let canvas = place::place_graph(graph, options);
    graph.width = canvas.width;
    graph.height = canvas.height;

    tracing::debug!(
        fulcrum = graph.start_id(),
        width = graph.width,
        height = graph.height,
        "arranged pedigree view"
    );
    Ok(())
}

/// [`arrange`] followed by [`derive_lines`]; the fresh lines replace the stored ones.
pub fn layout(graph: &mut Graph, options: &LayoutOptions) -> Result<()> {
    arrange(graph, options)?;
    let lines: Vec<Line> = derive_lines(graph);
    graph.set_lines(lines);
    Ok(())
}
