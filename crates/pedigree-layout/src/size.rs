//! Local sizing: aggregate width/height and relative centers of units and chains.
//!
//! Each card or ancestor occupies a slot as wide as itself or the chain nested above it,
//! whichever is wider. Slot members are bottom-aligned on one row; nested chains sit
//! `ancestry_gap` above that row.

use crate::options::LayoutOptions;
use crate::{Error, Result};
use pedigree_core::{ChainAnchor, ChainId, Graph, UnitId};

#[derive(Debug, Clone, Copy)]
pub(crate) struct Slot {
    pub(crate) width: f64,
    pub(crate) height: f64,
    /// Height reserved above the row for a nested chain, gap included.
    pub(crate) above: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Packed {
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) center_x_rel: f64,
    pub(crate) center_y_rel: f64,
    pub(crate) row_height: f64,
}

pub(crate) fn pack(slots: &[Slot], gap: f64) -> Packed {
    let row_height = slots.iter().map(|s| s.height).fold(0.0, f64::max);
    let above = slots.iter().map(|s| s.above).fold(0.0, f64::max);
    let lowest = slots
        .iter()
        .map(|s| s.height)
        .reduce(f64::min)
        .unwrap_or(0.0);
    let width = slots.iter().map(|s| s.width).sum::<f64>()
        + gap * slots.len().saturating_sub(1) as f64;
    let height = above + row_height;

    let center_x_rel = match slots {
        [first, _] => first.width + gap / 2.0,
        [only] => only.width / 2.0,
        _ => width / 2.0,
    };

    Packed {
        width,
        height,
        center_x_rel,
        center_y_rel: height - lowest / 2.0,
        row_height,
    }
}

/// Every card and ancestor must carry a measured, positive size.
pub(crate) fn check_sizes(graph: &Graph) -> Result<()> {
    let measured = |w: f64, h: f64| w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0;

    if let Some(card) = graph.cards().iter().find(|c| !measured(c.width, c.height)) {
        return Err(Error::SizingNotReady {
            element: format!("card {} ({})", card.id.index(), card.person),
        });
    }
    if let Some(ancestor) = graph
        .ancestors()
        .iter()
        .find(|a| !measured(a.width, a.height))
    {
        return Err(Error::SizingNotReady {
            element: format!("ancestor {} ({})", ancestor.ancestry, ancestor.person),
        });
    }
    Ok(())
}

pub(crate) fn size_graph(graph: &mut Graph, options: &LayoutOptions) {
    // Nested chains are created after the element they stand on, so sizing in reverse creation
    // order always finds nested sizes ready.
    for index in (0..graph.ancestry_chains().len()).rev() {
        size_chain(graph, ChainId(index), options);
    }
    for index in 0..graph.units().len() {
        size_unit(graph, UnitId(index), options);
    }
}

fn nested_slot(graph: &Graph, width: f64, height: f64, nested: Option<ChainId>, gap: f64) -> Slot {
    match nested.map(|id| graph.chain(id)) {
        Some(chain) => Slot {
            width: width.max(chain.width),
            height,
            above: chain.height + gap,
        },
        None => Slot {
            width,
            height,
            above: 0.0,
        },
    }
}

pub(crate) fn chain_slots(graph: &Graph, id: ChainId, options: &LayoutOptions) -> Vec<Slot> {
    graph
        .chain(id)
        .ancestors()
        .map(|a| {
            let ancestor = graph.ancestor(a);
            nested_slot(
                graph,
                ancestor.width,
                ancestor.height,
                ancestor.parents,
                options.ancestry_gap,
            )
        })
        .collect()
}

pub(crate) fn unit_slots(graph: &Graph, id: UnitId, options: &LayoutOptions) -> Vec<Slot> {
    graph
        .unit(id)
        .cards()
        .map(|c| {
            let card = graph.card(c);
            nested_slot(
                graph,
                card.width,
                card.height,
                graph.nested_chain(ChainAnchor::Card(c)),
                options.ancestry_gap,
            )
        })
        .collect()
}

fn size_chain(graph: &mut Graph, id: ChainId, options: &LayoutOptions) {
    let packed = pack(&chain_slots(graph, id, options), options.ancestor_gap);
    let chain = graph.chain_mut(id);
    chain.width = packed.width;
    chain.height = packed.height;
    chain.center_x_rel = packed.center_x_rel;
    chain.center_y_rel = packed.center_y_rel;
}

fn size_unit(graph: &mut Graph, id: UnitId, options: &LayoutOptions) {
    let packed = pack(&unit_slots(graph, id, options), options.spouse_gap);
    let unit = graph.unit_mut(id);
    unit.width = packed.width;
    unit.height = packed.height;
    unit.center_x_rel = packed.center_x_rel;
    unit.center_y_rel = packed.center_y_rel;
}
