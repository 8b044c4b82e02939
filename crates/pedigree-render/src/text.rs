use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

/// Font of a card or ancestor label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextStyle {
    pub font_family: Option<String>,
    pub font_size: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: None,
            font_size: 11.0,
        }
    }
}

/// Rendered extent of a label, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
    pub line_count: usize,
}

/// The sizing callback: how wide and tall a label renders.
pub trait TextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// Font-free metrics in fractions of the font size, so layouts are reproducible everywhere.
///
/// Each display column advances `em_advance` ems (wide CJK characters take two columns) and
/// each `\n`-separated line is `leading` ems tall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeterministicTextMeasurer {
    pub em_advance: f64,
    pub leading: f64,
}

impl DeterministicTextMeasurer {
    pub const DEFAULT_EM_ADVANCE: f64 = 0.6;
    pub const DEFAULT_LEADING: f64 = 1.2;

    pub fn new(em_advance: f64, leading: f64) -> Self {
        Self {
            em_advance,
            leading,
        }
    }
}

impl Default for DeterministicTextMeasurer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EM_ADVANCE, Self::DEFAULT_LEADING)
    }
}

impl TextMeasurer for DeterministicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let em = style.font_size.max(1.0);
        let (line_count, columns) = text
            .split('\n')
            .fold((0usize, 0usize), |(lines, widest), line| {
                (lines + 1, widest.max(line.width()))
            });

        TextMetrics {
            width: columns as f64 * self.em_advance * em,
            height: line_count as f64 * self.leading * em,
            line_count,
        }
    }
}
