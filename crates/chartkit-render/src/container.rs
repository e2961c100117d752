use crate::Result;
use crate::html::{class_names, escape_attr};
use crate::scope::{ChartScope, RenderNode};
use crate::style::ChartStyle;
use chartkit_core::{ChartConfig, ChartId};
use std::fmt::Write as _;

const CONTAINER_CLASS: &str = "flex aspect-video justify-center text-xs";

/// Outer element of one chart instance.
///
/// Rendering establishes the instance's [`ChartScope`], emits the theme style block and hands a
/// scoped [`RenderNode`] to the plotting surface, whose markup becomes the container's body.
#[derive(Debug, Clone)]
pub struct ChartContainer<'c> {
    config: &'c ChartConfig,
    chart_id: ChartId,
    class_name: Option<String>,
}

impl<'c> ChartContainer<'c> {
    /// A container with a freshly generated instance id.
    pub fn new(config: &'c ChartConfig) -> Self {
        Self {
            config,
            chart_id: ChartId::generate(),
            class_name: None,
        }
    }

    /// Uses a caller-chosen id (sanitized) instead of a generated one.
    pub fn id(mut self, id: &str) -> Self {
        self.chart_id = ChartId::from_user_id(id);
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn chart_id(&self) -> &ChartId {
        &self.chart_id
    }

    pub fn style(&self) -> ChartStyle {
        ChartStyle::new(self.config, &self.chart_id)
    }

    pub fn render<F>(&self, surface: F) -> Result<String>
    where
        F: FnOnce(RenderNode<'_>) -> Result<String>,
    {
        let scope = ChartScope::establish(self.config, self.chart_id.clone());
        let body = surface(scope.node())?;

        let class = class_names([CONTAINER_CLASS, self.class_name.as_deref().unwrap_or_default()]);
        let mut out = String::with_capacity(body.len() + 256);
        let _ = write!(
            &mut out,
            r#"<div data-chart="{}" class="{}">"#,
            escape_attr(self.chart_id.as_str()),
            escape_attr(&class)
        );
        if let Some(style) = self.style().to_html() {
            out.push_str(&style);
        }
        out.push_str(&body);
        out.push_str("</div>");
        Ok(out)
    }
}
