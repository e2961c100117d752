#![forbid(unsafe_code)]

//! `chartkit` maps chart series keys to display metadata (label, icon, per-theme color) and uses
//! that mapping to emit theme-scoped CSS and to resolve tooltip/legend content for a plotting
//! surface.
//!
//! # Features
//!
//! - `render` (default): style emission, chart scopes, tooltip and legend markup
//!   (`chartkit::render`)

pub use chartkit_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use chartkit_render::html::class_names;
    pub use chartkit_render::{
        ChartContainer, ChartScope, ChartStyle, LegendProps, RenderNode, RenderOptions,
        ScopeMissingError, TooltipProps, VerticalAlign, emit_chart_style, render_legend,
        render_tooltip,
    };

    use chartkit_core::{ChartConfig, ChartId};

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Config(#[from] chartkit_core::Error),
        #[error(transparent)]
        Render(#[from] chartkit_render::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Loads a JSON chart config and emits its style sheet for `chart_id` (sanitized).
    pub fn chart_style_from_json(config_json: &str, chart_id: &str) -> Result<String> {
        let config = ChartConfig::from_json_str(config_json)?;
        Ok(emit_chart_style(&config, &ChartId::from_user_id(chart_id)))
    }

    /// Renders a chart container around the markup produced by `surface`.
    ///
    /// Without `chart_id` a unique instance id is generated.
    pub fn render_chart<F>(
        config: &ChartConfig,
        chart_id: Option<&str>,
        surface: F,
    ) -> Result<String>
    where
        F: FnOnce(RenderNode<'_>) -> chartkit_render::Result<String>,
    {
        let mut container = ChartContainer::new(config);
        if let Some(id) = chart_id {
            container = container.id(id);
        }
        Ok(container.render(surface)?)
    }

}
