use crate::Result;
use crate::html::{class_names, escape_attr, push_label};
use crate::scope::RenderNode;
use chartkit_core::{PayloadFields, RawLegendItem, Resolution, is_safe_color_value};
use serde::{Deserialize, Deserializer};
use std::fmt::Write as _;

/// Where the surface placed the legend. Only `top` changes the spacing; `bottom`, `middle`
/// and anything else the surface reports pad above the legend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    #[default]
    Bottom,
}

impl<'de> Deserialize<'de> for VerticalAlign {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<String>::deserialize(deserializer)?.as_deref() {
            Some("top") => Self::Top,
            _ => Self::Bottom,
        })
    }
}

impl VerticalAlign {
    /// Legends above the plot pad below themselves and vice versa.
    fn spacing_class(self) -> &'static str {
        match self {
            Self::Top => "pb-3",
            Self::Bottom => "pt-3",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LegendProps {
    pub payload: Option<Vec<RawLegendItem>>,
    pub vertical_align: VerticalAlign,
    pub class_name: Option<String>,
}

/// Renders legend content, or `Ok(None)` when the payload is absent or empty.
///
/// Swatches use the color the plotting surface assigned to the item, not the registry color. A
/// color that could break out of the `background-color` declaration is dropped.
pub fn render_legend(node: &RenderNode<'_>, props: &LegendProps) -> Result<Option<String>> {
    let scope = node.current_scope()?;

    let Some(payload) = props.payload.as_deref().filter(|p| !p.is_empty()) else {
        return Ok(None);
    };
    let config = scope.config();

    let class = class_names([
        "flex justify-center gap-4",
        props.vertical_align.spacing_class(),
        props.class_name.as_deref().unwrap_or_default(),
    ]);
    let mut out = String::new();
    let _ = write!(&mut out, r#"<div class="{}">"#, escape_attr(&class));

    for (i, item) in payload.iter().enumerate() {
        let resolution = Resolution::new(config, item, i);
        let _ = write!(
            &mut out,
            r#"<div class="flex items-center gap-2" data-series="{}">"#,
            escape_attr(&resolution.key)
        );
        match item.raw_color() {
            Some(color) if is_safe_color_value(color) => {
                let _ = write!(
                    &mut out,
                    r#"<span class="h-2 w-2 rounded-sm" style="background-color: {}"></span>"#,
                    escape_attr(color)
                );
            }
            Some(color) => {
                tracing::debug!(series = %resolution.key, color, "dropping unsafe legend color");
                out.push_str(r#"<span class="h-2 w-2 rounded-sm"></span>"#);
            }
            None => out.push_str(r#"<span class="h-2 w-2 rounded-sm"></span>"#),
        }
        if let Some(icon) = resolution.entry.and_then(|e| e.icon.as_ref()) {
            out.push_str(icon.as_markup());
        }
        out.push_str("<span>");
        push_label(&mut out, &resolution.label(item));
        out.push_str("</span></div>");
    }
    out.push_str("</div>");

    Ok(Some(out))
}
