//! Connector derivation from final coordinates.

use pedigree_core::{ChainAnchor, ChainId, Graph, Line, NodeRef};

/// Bottom-edge anchor of a canvas node: the couple midpoint, or the center of a lone member.
fn bottom_anchor(graph: &Graph, node: NodeRef) -> (f64, f64) {
    match node {
        NodeRef::Unit(id) => {
            let u = graph.unit(id);
            (u.x + u.center_x_rel, u.y + u.height)
        }
        NodeRef::Chain(id) => chain_bottom(graph, id),
    }
}

fn chain_bottom(graph: &Graph, id: ChainId) -> (f64, f64) {
    let c = graph.chain(id);
    (c.x + c.center_x_rel, c.y + c.height)
}

/// Derives every connector of an arranged graph. Pure: the graph is not touched.
///
/// Lines come out in a stable order: descent edges in node creation order, then one line per
/// nested ancestry chain in chain creation order.
pub fn derive_lines(graph: &Graph) -> Vec<Line> {
    let mut lines = Vec::new();

    for &node in graph.nodes() {
        let (x1, y1) = bottom_anchor(graph, node);
        for &child in graph.children(node) {
            let card = graph.card(graph.unit(child).descent_card);
            lines.push(Line::new(x1, y1, card.center_x(), card.y));
        }
    }

    for chain in graph.ancestry_chains() {
        let (x2, y2) = match chain.anchor {
            ChainAnchor::TopLevel => continue,
            ChainAnchor::Card(id) => {
                let card = graph.card(id);
                (card.center_x(), card.y)
            }
            ChainAnchor::Ancestor(id) => {
                let ancestor = graph.ancestor(id);
                (ancestor.center_x(), ancestor.y)
            }
        };
        let (x1, y1) = chain_bottom(graph, chain.id);
        lines.push(Line::new(x1, y1, x2, y2));
    }

    lines
}
