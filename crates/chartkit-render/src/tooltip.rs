use crate::html::{class_names, escape_attr, escape_text, push_label};
use crate::scope::RenderNode;
use crate::{RenderOptions, Result};
use chartkit_core::{Label, RawPayloadItem, Resolution};
use serde::Deserialize;
use std::fmt::Write as _;

const TOOLTIP_CLASS: &str = "rounded-lg border bg-background px-3 py-2 text-xs shadow";

/// What the plotting surface passes when it asks for tooltip content.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipProps {
    /// Whether the pointer is over a plotted point.
    pub active: bool,
    pub payload: Option<Vec<RawPayloadItem>>,
    /// Heading shown once above the rows, typically the x-axis category.
    pub label: Option<Label>,
    pub class_name: Option<String>,
}

/// Renders tooltip content, or `Ok(None)` when inactive or there is nothing to show.
///
/// Fails with [`crate::ScopeMissingError`] when `node` has no chart scope, whatever the props.
pub fn render_tooltip(
    node: &RenderNode<'_>,
    props: &TooltipProps,
    options: &RenderOptions,
) -> Result<Option<String>> {
    let scope = node.current_scope()?;

    if !props.active {
        return Ok(None);
    }
    let Some(payload) = props.payload.as_deref().filter(|p| !p.is_empty()) else {
        return Ok(None);
    };
    let config = scope.config();

    let class = class_names([TOOLTIP_CLASS, props.class_name.as_deref().unwrap_or_default()]);
    let mut out = String::new();
    let _ = write!(&mut out, r#"<div class="{}">"#, escape_attr(&class));

    if let Some(label) = props.label.as_ref().filter(|l| !l.is_empty()) {
        out.push_str(r#"<div class="mb-1 font-medium">"#);
        push_label(&mut out, label);
        out.push_str("</div>");
    }

    out.push_str(r#"<div class="grid gap-1">"#);
    for (i, item) in payload.iter().enumerate() {
        let shown = Resolution::new(config, item, i).display_item(item);
        let _ = write!(
            &mut out,
            r#"<div class="flex justify-between gap-4" data-series="{}"><span class="text-muted-foreground">"#,
            escape_attr(&shown.key)
        );
        push_label(&mut out, &shown.label);
        out.push_str("</span>");
        if let Some(value) = shown.numeric_value {
            let _ = write!(
                &mut out,
                r#"<span class="font-mono">{}</span>"#,
                escape_text(&options.locale.format(value))
            );
        }
        out.push_str("</div>");
    }
    out.push_str("</div></div>");

    Ok(Some(out))
}
