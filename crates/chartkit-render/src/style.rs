//! Theme-scoped custom properties for one chart instance.
//!
//! Every colored series gets a `--color-<key>` property inside one rule per theme. The rules are
//! scoped by the instance's `data-chart` attribute; non-default themes additionally require an
//! ancestor matching the theme's selector prefix (e.g. `.dark`).

use chartkit_core::theme::{THEMES, color_variable};
use chartkit_core::{ChartConfig, ChartId};
use std::fmt::Write as _;

/// Emits the style sheet text, or an empty string when no entry carries a color or theme map.
///
/// Output follows registry order and is byte-identical for identical input.
pub fn emit_chart_style(config: &ChartConfig, chart_id: &ChartId) -> String {
    if !config.has_colors() {
        return String::new();
    }

    let mut out = String::new();
    let mut declarations = 0usize;
    for (i, theme) in THEMES.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if !theme.selector_prefix.is_empty() {
            out.push_str(theme.selector_prefix);
            out.push(' ');
        }
        let _ = writeln!(&mut out, "[data-chart={chart_id}] {{");
        for (key, entry) in config.iter() {
            let Some(color) = entry.color_for_theme(theme.name) else {
                continue;
            };
            let _ = writeln!(&mut out, "  {}: {};", color_variable(key), color);
            declarations += 1;
        }
        out.push_str("}\n");
    }

    tracing::debug!(chart = %chart_id, declarations, "emitted chart theme style");
    out
}

/// The `<style>` element of a chart container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartStyle {
    css: String,
}

impl ChartStyle {
    pub fn new(config: &ChartConfig, chart_id: &ChartId) -> Self {
        Self {
            css: emit_chart_style(config, chart_id),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.css.is_empty()
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    /// `None` when there is nothing to declare.
    pub fn to_html(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(format!("<style>{}</style>", self.css))
    }
}
