use chartkit_core::{ChartConfig, ChartId};

/// Tooltip or legend content was rendered outside any chart container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("chart content must be rendered inside a chart container (no chart scope)")]
pub struct ScopeMissingError;

/// Per-instance context: the registry every nested renderer reads from.
///
/// Lives for one container render; dropping it ends the scope.
#[derive(Debug)]
pub struct ChartScope<'c> {
    config: &'c ChartConfig,
    chart_id: ChartId,
}

impl<'c> ChartScope<'c> {
    pub fn establish(config: &'c ChartConfig, chart_id: ChartId) -> Self {
        tracing::debug!(chart = %chart_id, series = config.len(), "chart scope established");
        Self { config, chart_id }
    }

    pub fn config(&self) -> &'c ChartConfig {
        self.config
    }

    pub fn chart_id(&self) -> &ChartId {
        &self.chart_id
    }

    /// Root node of the render subtree that sees this scope.
    pub fn node(&self) -> RenderNode<'_> {
        RenderNode { scope: Some(self) }
    }
}

impl Drop for ChartScope<'_> {
    fn drop(&mut self) {
        tracing::trace!(chart = %self.chart_id, "chart scope released");
    }
}

/// Position in the render tree, carrying the nearest enclosing [`ChartScope`] (if any).
#[derive(Debug, Clone, Copy)]
pub struct RenderNode<'s> {
    scope: Option<&'s ChartScope<'s>>,
}

impl<'s> RenderNode<'s> {
    /// A node with no enclosing chart container.
    pub fn detached() -> Self {
        Self { scope: None }
    }

    pub fn current_scope(&self) -> Result<&'s ChartScope<'s>, ScopeMissingError> {
        self.scope.ok_or(ScopeMissingError)
    }

    pub fn has_scope(&self) -> bool {
        self.scope.is_some()
    }
}
