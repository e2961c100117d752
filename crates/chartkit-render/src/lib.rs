#![forbid(unsafe_code)]

//! Headless markup for chart wrappers: the theme style block, the scoped container, and the
//! tooltip/legend content the plotting surface calls back into.

pub mod container;
pub mod html;
pub mod legend;
pub mod scope;
pub mod style;
pub mod tooltip;

use chartkit_core::NumberLocale;

pub use container::ChartContainer;
pub use legend::{LegendProps, VerticalAlign, render_legend};
pub use scope::{ChartScope, RenderNode, ScopeMissingError};
pub use style::{ChartStyle, emit_chart_style};
pub use tooltip::{TooltipProps, render_tooltip};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    ScopeMissing(#[from] ScopeMissingError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Locale used for numeric tooltip values. Defaults to `en-US` so output is reproducible;
    /// use [`RenderOptions::system`] to follow the host locale.
    pub locale: NumberLocale,
}

impl RenderOptions {
    pub fn with_locale(locale: NumberLocale) -> Self {
        Self { locale }
    }

    pub fn system() -> Self {
        Self {
            locale: NumberLocale::system(),
        }
    }
}
