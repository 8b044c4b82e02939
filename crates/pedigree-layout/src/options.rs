use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Spacing used by the arrangement pass, in pixels.
///
/// These are presentation-tuning values; nothing in the algorithm depends on their magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutOptions {
    /// Between husband and wife inside a unit.
    pub spouse_gap: f64,
    /// Between father and mother inside an ancestry chain.
    pub ancestor_gap: f64,
    /// Between neighbouring blocks of the same generation row.
    pub sibling_gap: f64,
    /// Between generation rows.
    pub generation_gap: f64,
    /// Between a nested ancestry chain and the card or ancestor it stands on.
    pub ancestry_gap: f64,
    pub margin_x: f64,
    pub margin_y: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            spouse_gap: 15.0,
            ancestor_gap: 10.0,
            sibling_gap: 20.0,
            generation_gap: 40.0,
            ancestry_gap: 12.0,
            margin_x: 0.0,
            margin_y: 0.0,
        }
    }
}

impl LayoutOptions {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("spouseGap", self.spouse_gap),
            ("ancestorGap", self.ancestor_gap),
            ("siblingGap", self.sibling_gap),
            ("generationGap", self.generation_gap),
            ("ancestryGap", self.ancestry_gap),
            ("marginX", self.margin_x),
            ("marginY", self.margin_y),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidOptions {
                    message: format!("{name} must be a finite, non-negative number (got {value})"),
                });
            }
        }
        Ok(())
    }
}
