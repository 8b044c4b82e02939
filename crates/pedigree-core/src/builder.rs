//! Graph Builder: materializes the Graph Model for one fulcrum.
//!
//! The walk is bounded by generation counters only. The same person may be reached through
//! several paths (pedigree collapse, cousin marriages); every visit produces its own card or
//! ancestor record, and only the first card of a person is primary.

use crate::config::ViewConfig;
use crate::graph::{
    Ancestor, AncestorId, AncestryChain, Card, CardId, ChainAnchor, ChainId, Graph, NodeRef, Unit,
    UnitId,
};
use crate::record::{Family, Person, Record, Sex};
use crate::{Error, Result};
use rustc_hash::FxHashSet;

/// Builds the view centered on `fulcrum_id`.
///
/// Nothing is sized or positioned: measurement belongs to the presentation layer and placement
/// to the arrangement pass.
pub fn build(record: &Record, fulcrum_id: &str, config: &ViewConfig) -> Result<Graph> {
    let fulcrum = record.person(fulcrum_id).ok_or_else(|| Error::NotFound {
        id: fulcrum_id.to_string(),
    })?;

    let mut builder = Builder {
        record,
        config,
        graph: Graph::new(fulcrum_id, *config),
        primary: FxHashSet::default(),
    };
    builder.build_view(fulcrum);

    let graph = builder.graph;
    tracing::debug!(
        fulcrum = fulcrum_id,
        units = graph.units().len(),
        cards = graph.cards().len(),
        chains = graph.ancestry_chains().len(),
        ancestors = graph.ancestors().len(),
        "built pedigree view"
    );
    Ok(graph)
}

struct Builder<'a> {
    record: &'a Record,
    config: &'a ViewConfig,
    graph: Graph,
    /// Persons that already own a primary card.
    primary: FxHashSet<&'a str>,
}

impl<'a> Builder<'a> {
    fn build_view(&mut self, fulcrum: &'a Person) {
        let record = self.record;
        let parent_families: Vec<&'a Family> = record.parent_families(&fulcrum.id).collect();
        let wanted = self.config.parent_family();
        let parent_family = match parent_families.get(wanted) {
            Some(family) => Some(*family),
            None => {
                if !parent_families.is_empty() {
                    tracing::warn!(
                        fulcrum = fulcrum.id.as_str(),
                        wanted,
                        available = parent_families.len(),
                        "parent family index out of range; showing the first one"
                    );
                }
                parent_families.first().copied()
            }
        };

        let top_chain = match parent_family {
            Some(family) if self.config.max_ancestor_generations() > 0 => {
                self.chain(family, 1, 1, ChainAnchor::TopLevel)
            }
            _ => None,
        };
        let parent = top_chain.map(NodeRef::Chain);
        if let Some(parent) = parent {
            self.graph.nodes.push(parent);
            self.graph.roots.push(parent);
        }

        let row: Vec<&'a Person> = match parent_family {
            Some(family) => family
                .children
                .iter()
                .filter_map(|id| record.person(id))
                .collect(),
            None => vec![fulcrum],
        };
        let generation = usize::from(top_chain.is_some());

        // The fulcrum claims its primary card before any sibling branch can reach it as a spouse.
        let fulcrum_units = self.person_units(fulcrum, generation, 0, top_chain, parent);
        let mut youths = Vec::new();
        let mut fulcrum_placed = false;
        for person in row {
            if person.id == fulcrum.id {
                if !fulcrum_placed {
                    youths.extend(fulcrum_units.iter().copied());
                    fulcrum_placed = true;
                }
                continue;
            }
            youths.extend(self.person_units(person, generation, 0, top_chain, parent));
        }

        match top_chain {
            Some(chain) => self.graph.chain_mut(chain).youths = youths,
            None => self
                .graph
                .roots
                .extend(youths.into_iter().map(NodeRef::Unit)),
        }
    }

    /// One unit per spouse family of `person` (or a single unit), plus descendants.
    fn person_units(
        &mut self,
        person: &'a Person,
        generation: usize,
        depth: u32,
        ancestry: Option<ChainId>,
        parent: Option<NodeRef>,
    ) -> Vec<UnitId> {
        let record = self.record;
        let families: Vec<&'a Family> = record.spouse_families(&person.id).collect();

        if families.is_empty() {
            let unit = UnitId(self.graph.units.len());
            let card = self.card(person, unit, ancestry);
            let (husband, wife) = match person.sex {
                Sex::Female => (None, Some(card)),
                Sex::Male | Sex::Unknown => (Some(card), None),
            };
            self.push_unit(unit, None, husband, wife, card, generation, parent);
            return vec![unit];
        }

        let mut units = Vec::with_capacity(families.len());
        for family in families {
            let unit = UnitId(self.graph.units.len());
            let mut descent = None;
            let mut slots = [None, None];
            for (slot, spouse_id) in [family.husband.as_deref(), family.wife.as_deref()]
                .into_iter()
                .enumerate()
            {
                let Some(spouse) = spouse_id.and_then(|id| record.person(id)) else {
                    continue;
                };
                let card = if spouse.id == person.id && descent.is_none() {
                    let card = self.card(person, unit, ancestry);
                    descent = Some(card);
                    card
                } else {
                    let card = self.card(spouse, unit, None);
                    self.spouse_ancestry(card, spouse);
                    card
                };
                slots[slot] = Some(card);
            }
            let Some(descent) = descent.or(slots[0]).or(slots[1]) else {
                continue;
            };
            self.push_unit(
                unit,
                Some(family),
                slots[0],
                slots[1],
                descent,
                generation,
                parent,
            );

            if depth < self.config.max_descent_generations() {
                let mut guard_group = Vec::new();
                for child in family.children.iter().filter_map(|id| record.person(id)) {
                    guard_group.extend(self.person_units(
                        child,
                        generation + 1,
                        depth + 1,
                        None,
                        Some(NodeRef::Unit(unit)),
                    ));
                }
                self.graph.unit_mut(unit).guard_group = guard_group;
            }
            units.push(unit);
        }
        units
    }

    #[allow(clippy::too_many_arguments)]
    fn push_unit(
        &mut self,
        id: UnitId,
        family: Option<&Family>,
        husband: Option<CardId>,
        wife: Option<CardId>,
        descent_card: CardId,
        generation: usize,
        parent: Option<NodeRef>,
    ) {
        debug_assert_eq!(id.0, self.graph.units.len());
        self.graph.units.push(Unit {
            id,
            family: family.map(|f| f.id.clone()),
            husband,
            wife,
            marriage_date: family.and_then(|f| f.marriage_date.clone()),
            descent_card,
            parent,
            guard_group: Vec::new(),
            generation,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            center_x_rel: 0.0,
            center_y_rel: 0.0,
        });
        self.graph.nodes.push(NodeRef::Unit(id));
    }

    fn card(&mut self, person: &'a Person, unit: UnitId, ancestry: Option<ChainId>) -> CardId {
        let id = CardId(self.graph.cards.len());
        let acquired = !self.primary.insert(person.id.as_str());
        self.graph.cards.push(Card {
            id,
            person: person.id.clone(),
            sex: person.sex,
            acquired,
            dead: person.is_dead(),
            unit,
            ancestry,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        });
        id
    }

    /// Stacks the parents of a married-in spouse above their card.
    fn spouse_ancestry(&mut self, card: CardId, spouse: &'a Person) {
        if self.config.max_ancestor_generations() == 0 {
            return;
        }
        let Some(family) = self.record.parent_families(&spouse.id).next() else {
            return;
        };
        let chain = self.chain(family, 1, 1, ChainAnchor::Card(card));
        self.graph.card_mut(card).ancestry = chain;
    }

    /// Builds the chain of `family`'s spouses as the parents of a child numbered `child_number`.
    fn chain(
        &mut self,
        family: &'a Family,
        child_number: u64,
        generation: u32,
        anchor: ChainAnchor,
    ) -> Option<ChainId> {
        if family.husband.is_none() && family.wife.is_none() {
            return None;
        }

        let id = ChainId(self.graph.chains.len());
        self.graph.chains.push(AncestryChain {
            id,
            family: family.id.clone(),
            fore_father: None,
            fore_mother: None,
            generation,
            anchor,
            youths: Vec::new(),
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            center_x_rel: 0.0,
            center_y_rel: 0.0,
        });

        let fore_father = family
            .husband
            .as_deref()
            .and_then(|pid| self.ancestor(pid, 2 * child_number, id, generation));
        let fore_mother = family
            .wife
            .as_deref()
            .and_then(|pid| self.ancestor(pid, 2 * child_number + 1, id, generation));

        let chain = self.graph.chain_mut(id);
        chain.fore_father = fore_father;
        chain.fore_mother = fore_mother;
        Some(id)
    }

    fn ancestor(
        &mut self,
        person_id: &str,
        number: u64,
        chain: ChainId,
        generation: u32,
    ) -> Option<AncestorId> {
        let record = self.record;
        let person = record.person(person_id)?;

        let id = AncestorId(self.graph.ancestors.len());
        self.graph.ancestors.push(Ancestor {
            id,
            person: person.id.clone(),
            sex: person.sex,
            dead: person.is_dead(),
            ancestry: number,
            chain,
            parents: None,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        });

        if generation < self.config.max_ancestor_generations() {
            if let Some(family) = record.parent_families(&person.id).next() {
                let parents = self.chain(family, number, generation + 1, ChainAnchor::Ancestor(id));
                self.graph.ancestor_mut(id).parents = parents;
            }
        }
        Some(id)
    }
}
