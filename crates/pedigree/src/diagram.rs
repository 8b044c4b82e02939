use crate::HeadlessResult;
use pedigree_core::{AncestorId, CardId, Error, Graph, Record, ViewConfig, build};
use pedigree_layout::LayoutOptions;
use pedigree_render::{CardStyle, DeterministicTextMeasurer, PedigreeLayout, TextMeasurer};
use std::sync::Arc;

/// Builds, measures and arranges the view centered on `fulcrum_id`.
pub fn render_view(
    record: &Record,
    fulcrum_id: &str,
    config: &ViewConfig,
    options: &LayoutOptions,
    measurer: &dyn TextMeasurer,
    style: &CardStyle,
) -> HeadlessResult<Graph> {
    let mut graph = build(record, fulcrum_id, config)?;
    pedigree_render::measure_graph(&mut graph, record, measurer, style);
    pedigree_layout::layout(&mut graph, options)?;
    Ok(graph)
}

/// An interactive pedigree view over one record.
///
/// Every fulcrum change discards the current [`Graph`] and recomputes the view from scratch.
/// A failed change (an unknown person, a bad option) leaves the current view untouched.
#[derive(Clone)]
pub struct Diagram {
    record: Record,
    pub config: ViewConfig,
    pub layout: LayoutOptions,
    pub style: CardStyle,
    pub text_measurer: Arc<dyn TextMeasurer + Send + Sync>,
    graph: Option<Graph>,
}

impl Diagram {
    pub fn new(record: Record) -> Self {
        Self {
            record,
            config: ViewConfig::default(),
            layout: LayoutOptions::default(),
            style: CardStyle::default(),
            text_measurer: Arc::new(DeterministicTextMeasurer::default()),
            graph: None,
        }
    }

    pub fn with_config(mut self, config: ViewConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_layout_options(mut self, layout: LayoutOptions) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_style(mut self, style: CardStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_text_measurer(mut self, measurer: Arc<dyn TextMeasurer + Send + Sync>) -> Self {
        self.text_measurer = measurer;
        self
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    /// The current view, once a fulcrum has been shown.
    pub fn graph(&self) -> Option<&Graph> {
        self.graph.as_ref()
    }

    pub fn fulcrum_id(&self) -> Option<&str> {
        self.graph.as_ref().map(Graph::start_id)
    }

    /// Re-centers the view on `id`.
    pub fn start_from(&mut self, id: &str) -> HeadlessResult<&Graph> {
        let result = render_view(
            &self.record,
            id,
            &self.config,
            &self.layout,
            self.text_measurer.as_ref(),
            &self.style,
        );
        match result {
            Ok(graph) => {
                tracing::debug!(
                    from = self.fulcrum_id(),
                    to = id,
                    width = graph.width,
                    height = graph.height,
                    "re-centered pedigree view"
                );
                Ok(&*self.graph.insert(graph))
            }
            Err(err) => {
                tracing::warn!(
                    fulcrum = self.fulcrum_id(),
                    requested = id,
                    error = %err,
                    "keeping the current pedigree view"
                );
                Err(err)
            }
        }
    }

    /// Re-centers the view on the person shown by `card` in the current view.
    pub fn select_card(&mut self, card: CardId) -> HeadlessResult<&Graph> {
        let person = self.selected_person(format!("card {}", card.index()), |g| {
            g.cards().get(card.index()).map(|c| &c.person)
        })?;
        self.start_from(&person)
    }

    /// Re-centers the view on the person shown by `ancestor` in the current view.
    pub fn select_ancestor(&mut self, ancestor: AncestorId) -> HeadlessResult<&Graph> {
        let person = self.selected_person(format!("ancestor {}", ancestor.index()), |g| {
            g.ancestors().get(ancestor.index()).map(|a| &a.person)
        })?;
        self.start_from(&person)
    }

    /// Recomputes the current view, picking up changed configuration or options.
    pub fn refresh(&mut self) -> HeadlessResult<Option<&Graph>> {
        let Some(id) = self.fulcrum_id().map(str::to_string) else {
            return Ok(None);
        };
        Ok(Some(self.start_from(&id)?))
    }

    /// Serializable snapshot of the current view.
    pub fn snapshot(&self) -> Option<PedigreeLayout> {
        self.graph
            .as_ref()
            .map(|g| PedigreeLayout::from_graph(g, &self.record))
    }

    /// Person behind a selected element. An element outside the current view is reported as
    /// not found under `element` and nothing is rebuilt.
    fn selected_person(
        &self,
        element: String,
        pick: impl FnOnce(&Graph) -> Option<&String>,
    ) -> HeadlessResult<String> {
        match self.graph.as_ref().and_then(pick) {
            Some(person) => Ok(person.clone()),
            None => {
                tracing::warn!(
                    fulcrum = self.fulcrum_id(),
                    element = %element,
                    "selection is not part of the current pedigree view"
                );
                Err(Error::NotFound { id: element }.into())
            }
        }
    }
}
