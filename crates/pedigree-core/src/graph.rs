//! The Graph Model for one fulcrum-centered view.
//!
//! A [`Graph`] is an arena: cards, units, ancestry chains and ancestors live in flat vectors and
//! refer to each other through typed indices. The same person may be referenced by several cards
//! and ancestors; none of them own the person, they only carry its id.
//!
//! Sizes are written by the presentation layer after measurement, positions by the arrangement
//! pass. All coordinates are absolute canvas pixels with the origin at the top-left corner.

use crate::config::ViewConfig;
use crate::labels::marriage_year;
use crate::record::Sex;
use serde::Serialize;

macro_rules! arena_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        pub struct $name(pub usize);

        impl $name {
            pub fn index(self) -> usize {
                self.0
            }
        }
    };
}

arena_id!(CardId);
arena_id!(UnitId);
arena_id!(ChainId);
arena_id!(AncestorId);

/// A node placed directly on the canvas (as opposed to a chain nested above a card or ancestor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeRef {
    Unit(UnitId),
    Chain(ChainId),
}

/// Where an ancestry chain hangs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChainAnchor {
    /// Parents of the fulcrum and its siblings; placed on the canvas as its own node.
    TopLevel,
    /// Parents of a married-in spouse, stacked above that card.
    Card(CardId),
    /// Parents of an ancestor, stacked above that ancestor.
    Ancestor(AncestorId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: CardId,
    pub person: String,
    pub sex: Sex,
    /// The person already has a primary card in this view.
    pub acquired: bool,
    pub dead: bool,
    pub unit: UnitId,
    pub ancestry: Option<ChainId>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Card {
    pub fn has_ancestry(&self) -> bool {
        self.ancestry.is_some()
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ancestor {
    pub id: AncestorId,
    pub person: String,
    pub sex: Sex,
    pub dead: bool,
    /// Ahnentafel number: father `2n`, mother `2n + 1` of a child numbered `n`.
    pub ancestry: u64,
    pub chain: ChainId,
    /// Chain holding this ancestor's own parents, if shown.
    pub parents: Option<ChainId>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Ancestor {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AncestryChain {
    pub id: ChainId,
    pub family: String,
    pub fore_father: Option<AncestorId>,
    pub fore_mother: Option<AncestorId>,
    /// 1 for the parents of the anchor, 2 for grandparents, and so on.
    pub generation: u32,
    pub anchor: ChainAnchor,
    /// Units hanging below a top-level chain.
    pub youths: Vec<UnitId>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub center_x_rel: f64,
    pub center_y_rel: f64,
}

impl AncestryChain {
    pub fn is_couple(&self) -> bool {
        self.fore_father.is_some() && self.fore_mother.is_some()
    }

    pub fn ancestors(&self) -> impl Iterator<Item = AncestorId> {
        self.fore_father.into_iter().chain(self.fore_mother)
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.center_x_rel
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.center_y_rel
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub id: UnitId,
    /// `None` for a person shown alone because they have no spouse family.
    pub family: Option<String>,
    pub husband: Option<CardId>,
    pub wife: Option<CardId>,
    pub marriage_date: Option<String>,
    /// The card through which this unit descends from the node above.
    pub descent_card: CardId,
    pub parent: Option<NodeRef>,
    /// Child units ("youths") descending from this unit.
    pub guard_group: Vec<UnitId>,
    /// Generation row, 0 being the topmost row of the view.
    pub generation: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub center_x_rel: f64,
    pub center_y_rel: f64,
}

impl Unit {
    pub fn is_couple(&self) -> bool {
        self.husband.is_some() && self.wife.is_some()
    }

    pub fn cards(&self) -> impl Iterator<Item = CardId> {
        self.husband.into_iter().chain(self.wife)
    }

    pub fn has_marriage_marker(&self) -> bool {
        self.is_couple() && self.marriage_date.is_some()
    }

    pub fn has_descent_stub(&self) -> bool {
        self.is_couple() && !self.guard_group.is_empty()
    }

    pub fn marriage_year(&self) -> Option<String> {
        self.marriage_date.as_deref().and_then(marriage_year)
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.center_x_rel
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.center_y_rel
    }
}

/// A cubic connector between a parent's bottom edge and a child's top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Line {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Control points `(x1, y2)` and `(x2, y1)`: the curve leaves and arrives vertically.
    pub fn control_points(&self) -> ((f64, f64), (f64, f64)) {
        ((self.x1, self.y2), (self.x2, self.y1))
    }

    pub fn to_svg_path(&self) -> String {
        let ((c1x, c1y), (c2x, c2y)) = self.control_points();
        format!(
            "M{},{} C{},{} {},{} {},{}",
            self.x1, self.y1, c1x, c1y, c2x, c2y, self.x2, self.y2
        )
    }
}

#[derive(Debug, Clone)]
pub struct Graph {
    start_id: String,
    config: ViewConfig,
    pub(crate) cards: Vec<Card>,
    pub(crate) units: Vec<Unit>,
    pub(crate) chains: Vec<AncestryChain>,
    pub(crate) ancestors: Vec<Ancestor>,
    pub(crate) nodes: Vec<NodeRef>,
    pub(crate) roots: Vec<NodeRef>,
    lines: Vec<Line>,
    pub width: f64,
    pub height: f64,
}

impl Graph {
    pub(crate) fn new(start_id: impl Into<String>, config: ViewConfig) -> Self {
        Self {
            start_id: start_id.into(),
            config,
            cards: Vec::new(),
            units: Vec::new(),
            chains: Vec::new(),
            ancestors: Vec::new(),
            nodes: Vec::new(),
            roots: Vec::new(),
            lines: Vec::new(),
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn start_id(&self) -> &str {
        &self.start_id
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn is_fulcrum(&self, card: CardId) -> bool {
        self.card(card).person == self.start_id
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn ancestry_chains(&self) -> &[AncestryChain] {
        &self.chains
    }

    pub fn ancestors(&self) -> &[Ancestor] {
        &self.ancestors
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn set_lines(&mut self, lines: Vec<Line>) {
        self.lines = lines;
    }

    /// Every node placed directly on the canvas, in creation order.
    pub fn nodes(&self) -> &[NodeRef] {
        &self.nodes
    }

    /// Nodes at the top of the descent hierarchy, left to right.
    pub fn roots(&self) -> &[NodeRef] {
        &self.roots
    }

    /// Nodes hanging directly below `node`.
    pub fn children(&self, node: NodeRef) -> &[UnitId] {
        match node {
            NodeRef::Unit(id) => &self.unit(id).guard_group,
            NodeRef::Chain(id) => &self.chain(id).youths,
        }
    }

    /// Canvas nodes grouped by generation row, each row ordered by `x`.
    pub fn rows(&self) -> Vec<Vec<NodeRef>> {
        let mut rows: Vec<Vec<NodeRef>> = Vec::new();
        for &node in &self.nodes {
            let row = self.row_of(node);
            if rows.len() <= row {
                rows.resize_with(row + 1, Vec::new);
            }
            rows[row].push(node);
        }
        for row in &mut rows {
            row.sort_by(|a, b| self.node_x(*a).total_cmp(&self.node_x(*b)));
        }
        rows
    }

    fn row_of(&self, node: NodeRef) -> usize {
        match node {
            NodeRef::Unit(id) => self.unit(id).generation,
            NodeRef::Chain(_) => 0,
        }
    }

    /// Horizontal span `(left, right)` of a canvas node.
    pub fn node_span(&self, node: NodeRef) -> (f64, f64) {
        match node {
            NodeRef::Unit(id) => {
                let u = self.unit(id);
                (u.x, u.x + u.width)
            }
            NodeRef::Chain(id) => {
                let c = self.chain(id);
                (c.x, c.x + c.width)
            }
        }
    }

    fn node_x(&self, node: NodeRef) -> f64 {
        self.node_span(node).0
    }

    pub fn card(&self, id: CardId) -> &Card {
        &self.cards[id.0]
    }

    pub fn card_mut(&mut self, id: CardId) -> &mut Card {
        &mut self.cards[id.0]
    }

    pub fn unit(&self, id: UnitId) -> &Unit {
        &self.units[id.0]
    }

    pub fn unit_mut(&mut self, id: UnitId) -> &mut Unit {
        &mut self.units[id.0]
    }

    pub fn chain(&self, id: ChainId) -> &AncestryChain {
        &self.chains[id.0]
    }

    pub fn chain_mut(&mut self, id: ChainId) -> &mut AncestryChain {
        &mut self.chains[id.0]
    }

    pub fn ancestor(&self, id: AncestorId) -> &Ancestor {
        &self.ancestors[id.0]
    }

    pub fn ancestor_mut(&mut self, id: AncestorId) -> &mut Ancestor {
        &mut self.ancestors[id.0]
    }

    pub fn cards_mut(&mut self) -> impl Iterator<Item = &mut Card> {
        self.cards.iter_mut()
    }

    pub fn ancestors_mut(&mut self) -> impl Iterator<Item = &mut Ancestor> {
        self.ancestors.iter_mut()
    }

    /// The top-level chain holding the fulcrum's parents, if any.
    pub fn top_chain(&self) -> Option<ChainId> {
        self.chains
            .iter()
            .find(|c| c.anchor == ChainAnchor::TopLevel)
            .map(|c| c.id)
    }

    /// The chain nested above `anchor` (a card or an ancestor), if any.
    pub fn nested_chain(&self, anchor: ChainAnchor) -> Option<ChainId> {
        match anchor {
            ChainAnchor::TopLevel => None,
            ChainAnchor::Card(id) => self
                .card(id)
                .ancestry
                .filter(|chain| self.chain(*chain).anchor == anchor),
            ChainAnchor::Ancestor(id) => self.ancestor(id).parents,
        }
    }

    pub fn cards_of<'a>(&'a self, person: &'a str) -> impl Iterator<Item = &'a Card> {
        self.cards.iter().filter(move |c| c.person == person)
    }

    pub fn primary_card(&self, person: &str) -> Option<&Card> {
        self.cards
            .iter()
            .find(|c| c.person == person && !c.acquired)
    }
}
