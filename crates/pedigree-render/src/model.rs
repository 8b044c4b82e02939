//! Serializable snapshot of an arranged pedigree view.

use crate::measure::card_label;
use pedigree_core::labels::ancestor_label;
use pedigree_core::{ChainAnchor, Graph, Record, Sex};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardLayout {
    pub id: usize,
    pub person: String,
    pub label: String,
    pub sex: Sex,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fulcrum: bool,
    pub acquired: bool,
    /// Drawn with a death ribbon.
    pub dead: bool,
    /// The card has its own ancestry chain stacked above it.
    pub has_ancestry: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitLayout {
    pub id: usize,
    pub family: Option<String>,
    pub cards: Vec<usize>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub marriage_year: Option<String>,
    /// Draw the short connector between the spouses.
    pub marriage_marker: bool,
    /// Draw the vertical stub toward the children.
    pub descent_stub: bool,
    pub youths: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainLayout {
    pub id: usize,
    pub family: String,
    pub generation: u32,
    pub top_level: bool,
    pub couple: bool,
    pub ancestors: Vec<usize>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AncestorLayout {
    pub id: usize,
    pub person: String,
    pub label: String,
    pub ancestry: u64,
    pub sex: Sex,
    pub dead: bool,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineLayout {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PedigreeLayout {
    pub fulcrum: String,
    pub width: f64,
    pub height: f64,
    pub cards: Vec<CardLayout>,
    pub units: Vec<UnitLayout>,
    pub chains: Vec<ChainLayout>,
    pub ancestors: Vec<AncestorLayout>,
    pub lines: Vec<LineLayout>,
}

impl PedigreeLayout {
    pub fn from_graph(graph: &Graph, record: &Record) -> Self {
        let cards = graph
            .cards()
            .iter()
            .map(|c| CardLayout {
                id: c.id.index(),
                person: c.person.clone(),
                label: card_label(record, &c.person),
                sex: c.sex,
                x: c.x,
                y: c.y,
                width: c.width,
                height: c.height,
                fulcrum: graph.is_fulcrum(c.id),
                acquired: c.acquired,
                dead: c.dead,
                has_ancestry: graph.nested_chain(ChainAnchor::Card(c.id)).is_some(),
            })
            .collect();

        let units = graph
            .units()
            .iter()
            .map(|u| UnitLayout {
                id: u.id.index(),
                family: u.family.clone(),
                cards: u.cards().map(|c| c.index()).collect(),
                x: u.x,
                y: u.y,
                width: u.width,
                height: u.height,
                center_x: u.center_x(),
                center_y: u.center_y(),
                marriage_year: u.marriage_year(),
                marriage_marker: u.has_marriage_marker(),
                descent_stub: u.has_descent_stub(),
                youths: u.guard_group.iter().map(|y| y.index()).collect(),
            })
            .collect();

        let chains = graph
            .ancestry_chains()
            .iter()
            .map(|c| ChainLayout {
                id: c.id.index(),
                family: c.family.clone(),
                generation: c.generation,
                top_level: c.anchor == ChainAnchor::TopLevel,
                couple: c.is_couple(),
                ancestors: c.ancestors().map(|a| a.index()).collect(),
                x: c.x,
                y: c.y,
                width: c.width,
                height: c.height,
                center_x: c.center_x(),
                center_y: c.center_y(),
            })
            .collect();

        let ancestors = graph
            .ancestors()
            .iter()
            .map(|a| AncestorLayout {
                id: a.id.index(),
                person: a.person.clone(),
                label: ancestor_label(a),
                ancestry: a.ancestry,
                sex: a.sex,
                dead: a.dead,
                x: a.x,
                y: a.y,
                width: a.width,
                height: a.height,
            })
            .collect();

        let lines = graph
            .lines()
            .iter()
            .map(|l| LineLayout {
                x1: l.x1,
                y1: l.y1,
                x2: l.x2,
                y2: l.y2,
                path: l.to_svg_path(),
            })
            .collect();

        Self {
            fulcrum: graph.start_id().to_string(),
            width: graph.width,
            height: graph.height,
            cards,
            units,
            chains,
            ancestors,
            lines,
        }
    }

    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
