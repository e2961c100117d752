#![forbid(unsafe_code)]

//! Chart series configuration and theming model (headless).
//!
//! A chart instance is described by a [`ChartConfig`]: series key -> label, icon and color (flat
//! or per theme). This crate owns that model, the fixed theme set, instance ids, the records the
//! plotting surface hands back for tooltips and legends, and the resolution of those records to
//! config entries. Markup and style generation live in `chartkit-render`.

pub mod config;
pub mod error;
pub mod id;
pub mod number;
pub mod payload;
pub mod resolve;
pub mod theme;

pub use config::{ChartConfig, Coloring, ConfigEntry, Icon, Label, ThemeColors};
pub use error::{ConfigShapeError, Error, Result};
pub use id::ChartId;
pub use number::{NumberLocale, format_number};
pub use payload::{PayloadFields, PayloadValue, RawLegendItem, RawPayloadItem};
pub use resolve::{Resolution, ResolvedDisplayItem, resolve, resolve_all};
pub use theme::{THEMES, Theme, is_safe_color_value};
