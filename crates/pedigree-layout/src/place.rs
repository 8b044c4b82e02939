//! Global placement: generation rows and parent-over-children blocks.
//!
//! Every canvas node owns a horizontal block wide enough for itself and for the blocks of the
//! units hanging below it. The node's anchor (`center_x_rel`) sits over the middle of its
//! children's span, so blocks in one row never overlap and parents stay centered over children.

use crate::options::LayoutOptions;
use crate::size::{Slot, chain_slots, pack, unit_slots};
use pedigree_core::{ChainAnchor, ChainId, Graph, NodeRef, UnitId};
use rustc_hash::FxHashMap;

/// Horizontal extent of a block measured from the node's anchor.
#[derive(Debug, Clone, Copy, Default)]
struct Extent {
    left: f64,
    right: f64,
}

impl Extent {
    fn width(self) -> f64 {
        self.left + self.right
    }
}

pub(crate) struct Canvas {
    pub(crate) width: f64,
    pub(crate) height: f64,
}

pub(crate) fn place_graph(graph: &mut Graph, options: &LayoutOptions) -> Canvas {
    let roots = graph.roots().to_vec();

    let mut extents = FxHashMap::default();
    let mut row_heights = Vec::new();
    for &root in &roots {
        measure_block(graph, root, 0, options, &mut extents, &mut row_heights);
    }

    let mut row_tops = Vec::with_capacity(row_heights.len());
    let mut y = options.margin_y;
    for height in &row_heights {
        row_tops.push(y);
        y += height + options.generation_gap;
    }
    let content_height = if row_heights.is_empty() {
        0.0
    } else {
        y - options.generation_gap - options.margin_y
    };

    let rows = Rows {
        tops: row_tops,
        heights: row_heights,
    };
    let mut cursor = options.margin_x;
    for (i, &root) in roots.iter().enumerate() {
        if i > 0 {
            cursor += options.sibling_gap;
        }
        let extent = extents.get(&root).copied().unwrap_or_default();
        place_block(graph, root, cursor + extent.left, 0, &rows, &extents, options);
        cursor += extent.width();
    }

    Canvas {
        width: cursor + options.margin_x,
        height: content_height + 2.0 * options.margin_y,
    }
}

struct Rows {
    tops: Vec<f64>,
    heights: Vec<f64>,
}

fn node_size(graph: &Graph, node: NodeRef) -> (f64, f64, f64) {
    match node {
        NodeRef::Unit(id) => {
            let u = graph.unit(id);
            (u.width, u.height, u.center_x_rel)
        }
        NodeRef::Chain(id) => {
            let c = graph.chain(id);
            (c.width, c.height, c.center_x_rel)
        }
    }
}

fn children_span(children: &[UnitId], extents: &FxHashMap<NodeRef, Extent>, gap: f64) -> f64 {
    let widths: f64 = children
        .iter()
        .map(|c| {
            extents
                .get(&NodeRef::Unit(*c))
                .copied()
                .unwrap_or_default()
                .width()
        })
        .sum();
    widths + gap * children.len().saturating_sub(1) as f64
}

fn measure_block(
    graph: &Graph,
    node: NodeRef,
    depth: usize,
    options: &LayoutOptions,
    extents: &mut FxHashMap<NodeRef, Extent>,
    row_heights: &mut Vec<f64>,
) {
    let (width, height, anchor) = node_size(graph, node);
    if row_heights.len() <= depth {
        row_heights.resize(depth + 1, 0.0);
    }
    row_heights[depth] = row_heights[depth].max(height);

    let children = graph.children(node);
    for &child in children {
        measure_block(
            graph,
            NodeRef::Unit(child),
            depth + 1,
            options,
            extents,
            row_heights,
        );
    }

    let half_span = children_span(children, extents, options.sibling_gap) / 2.0;
    extents.insert(
        node,
        Extent {
            left: anchor.max(half_span),
            right: (width - anchor).max(half_span),
        },
    );
}

fn place_block(
    graph: &mut Graph,
    node: NodeRef,
    anchor_x: f64,
    depth: usize,
    rows: &Rows,
    extents: &FxHashMap<NodeRef, Extent>,
    options: &LayoutOptions,
) {
    let (_, height, anchor) = node_size(graph, node);
    let x = anchor_x - anchor;
    let y = rows.tops[depth] + rows.heights[depth] - height;
    match node {
        NodeRef::Unit(id) => place_unit(graph, id, x, y, options),
        NodeRef::Chain(id) => place_chain(graph, id, x, y, options),
    }

    let children = graph.children(node).to_vec();
    let mut cursor = anchor_x - children_span(&children, extents, options.sibling_gap) / 2.0;
    for child in children {
        let child = NodeRef::Unit(child);
        let extent = extents.get(&child).copied().unwrap_or_default();
        place_block(
            graph,
            child,
            cursor + extent.left,
            depth + 1,
            rows,
            extents,
            options,
        );
        cursor += extent.width() + options.sibling_gap;
    }
}

/// Left edge of each slot and the top of the shared row, for a node at `(x, y)`.
fn slot_origins(slots: &[Slot], x: f64, y: f64, gap: f64) -> (Vec<f64>, f64) {
    let packed = pack(slots, gap);
    let mut lefts = Vec::with_capacity(slots.len());
    let mut cursor = x;
    for slot in slots {
        lefts.push(cursor);
        cursor += slot.width + gap;
    }
    (lefts, y + packed.height - packed.row_height)
}

fn place_unit(graph: &mut Graph, id: UnitId, x: f64, y: f64, options: &LayoutOptions) {
    {
        let unit = graph.unit_mut(id);
        unit.x = x;
        unit.y = y;
    }
    let slots = unit_slots(graph, id, options);
    let (lefts, row_top) = slot_origins(&slots, x, y, options.spouse_gap);
    let bottom = y + graph.unit(id).height;
    let cards: Vec<_> = graph.unit(id).cards().collect();

    for ((card_id, slot), left) in cards.into_iter().zip(&slots).zip(lefts) {
        let nested = graph.nested_chain(ChainAnchor::Card(card_id));
        let card = graph.card_mut(card_id);
        card.x = left + (slot.width - card.width) / 2.0;
        card.y = bottom - card.height;
        if let Some(chain) = nested {
            place_nested(graph, chain, left, slot.width, row_top, options);
        }
    }
}

fn place_chain(graph: &mut Graph, id: ChainId, x: f64, y: f64, options: &LayoutOptions) {
    {
        let chain = graph.chain_mut(id);
        chain.x = x;
        chain.y = y;
    }
    let slots = chain_slots(graph, id, options);
    let (lefts, row_top) = slot_origins(&slots, x, y, options.ancestor_gap);
    let bottom = y + graph.chain(id).height;
    let members: Vec<_> = graph.chain(id).ancestors().collect();

    for ((ancestor_id, slot), left) in members.into_iter().zip(&slots).zip(lefts) {
        let ancestor = graph.ancestor_mut(ancestor_id);
        ancestor.x = left + (slot.width - ancestor.width) / 2.0;
        ancestor.y = bottom - ancestor.height;
        let parents = ancestor.parents;
        if let Some(parents) = parents {
            place_nested(graph, parents, left, slot.width, row_top, options);
        }
    }
}

/// Centers a nested chain over its slot, `ancestry_gap` above the row it stands on.
fn place_nested(
    graph: &mut Graph,
    chain: ChainId,
    slot_left: f64,
    slot_width: f64,
    row_top: f64,
    options: &LayoutOptions,
) {
    let (width, height) = {
        let c = graph.chain(chain);
        (c.width, c.height)
    };
    let x = slot_left + (slot_width - width) / 2.0;
    let y = row_top - options.ancestry_gap - height;
    place_chain(graph, chain, x, y, options);
}
