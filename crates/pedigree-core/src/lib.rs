#![forbid(unsafe_code)]

//! Genealogical record model + pedigree Graph Model and builder (headless).
//!
//! Pipeline for one view:
//! 1. [`build`] walks the [`Record`] around a fulcrum and materializes a [`Graph`]
//! 2. the presentation layer measures every card and ancestor label and writes their sizes
//! 3. `pedigree-layout` arranges the graph and derives connector lines
//!
//! Changing the fulcrum means building a new [`Graph`]; nothing is patched in place.

pub mod builder;
pub mod config;
pub mod error;
pub mod graph;
pub mod labels;
pub mod record;

pub use builder::build;
pub use config::{MAX_DESCENT_GENERATIONS, MAX_GENERATIONS, ViewConfig};
pub use error::{Error, Result};
pub use graph::{
    Ancestor, AncestorId, AncestryChain, Card, CardId, ChainAnchor, ChainId, Graph, Line, NodeRef,
    Unit, UnitId,
};
pub use record::{Family, Person, Record, Sex};

#[cfg(test)]
mod tests;
