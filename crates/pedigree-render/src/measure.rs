//! The sizing callback boundary: every card and ancestor gets its size from its label.

use crate::text::{TextMeasurer, TextStyle};
use pedigree_core::Graph;
use pedigree_core::Record;
use pedigree_core::labels::{ancestor_label, essence};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardStyle {
    pub font_family: Option<String>,
    pub font_size: f64,
    /// Border plus inner padding on each side of a person card.
    pub card_padding: f64,
    /// Border plus inner padding on each side of an ancestor number.
    pub ancestor_padding: f64,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            font_family: None,
            font_size: 11.0,
            card_padding: 17.0,
            ancestor_padding: 6.0,
        }
    }
}

impl CardStyle {
    pub fn text_style(&self) -> TextStyle {
        TextStyle {
            font_family: self.font_family.clone(),
            font_size: self.font_size,
        }
    }
}

/// Display label of a card: the person's essence, or the bare id when the record lacks them.
pub fn card_label(record: &Record, person_id: &str) -> String {
    record
        .person(person_id)
        .map(essence)
        .unwrap_or_else(|| person_id.to_string())
}

/// Writes the measured size of every card and ancestor into `graph`.
pub fn measure_graph(
    graph: &mut Graph,
    record: &Record,
    measurer: &dyn TextMeasurer,
    style: &CardStyle,
) {
    let text_style = style.text_style();

    for card in graph.cards_mut() {
        let metrics = measurer.measure(&card_label(record, &card.person), &text_style);
        card.width = metrics.width + 2.0 * style.card_padding;
        card.height = metrics.height + 2.0 * style.card_padding;
    }
    for ancestor in graph.ancestors_mut() {
        let metrics = measurer.measure(&ancestor_label(ancestor), &text_style);
        ancestor.width = metrics.width + 2.0 * style.ancestor_padding;
        ancestor.height = metrics.height + 2.0 * style.ancestor_padding;
    }
}
