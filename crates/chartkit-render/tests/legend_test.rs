use chartkit_core::{ChartConfig, ChartId};
use chartkit_render::{
    ChartScope, Error, LegendProps, RenderNode, VerticalAlign, render_legend,
};
use serde_json::json;

fn legend_props(value: serde_json::Value) -> LegendProps {
    serde_json::from_value(value).expect("legend props")
}

#[test]
fn swatch_uses_surface_color_not_registry_color() {
    let cfg = ChartConfig::from_json_value(&json!({
        "sales": { "label": "Sales", "color": "#00ff00" }
    }))
    .expect("config");
    let scope = ChartScope::establish(&cfg, ChartId::from_user_id("l"));
    let props = legend_props(json!({
        "payload": [{ "value": "sales", "dataKey": "sales", "color": "#ff0000", "type": "rect" }]
    }));

    let html = render_legend(&scope.node(), &props)
        .expect("render")
        .expect("visible legend");
    let doc = roxmltree::Document::parse(&html).expect("well-formed legend");
    let swatch = doc
        .descendants()
        .find(|n| n.attribute("class") == Some("h-2 w-2 rounded-sm"))
        .expect("swatch");
    assert_eq!(swatch.attribute("style"), Some("background-color: #ff0000"));
    assert!(!html.contains("#00ff00"));
}

#[test]
fn labels_fall_back_from_config_to_value_to_index() {
    let cfg = ChartConfig::from_json_value(&json!({ "desktop": { "label": "Desktop" } }))
        .expect("config");
    let scope = ChartScope::establish(&cfg, ChartId::from_user_id("l"));
    let props = legend_props(json!({
        "verticalAlign": "top",
        "payload": [
            { "dataKey": "desktop", "value": "desktop", "color": "#111" },
            { "value": "Tablet", "color": "#222" },
            { "color": "#333" }
        ]
    }));
    assert_eq!(props.vertical_align, VerticalAlign::Top);

    let html = render_legend(&scope.node(), &props)
        .expect("render")
        .expect("visible legend");
    let doc = roxmltree::Document::parse(&html).expect("well-formed legend");
    let rows: Vec<(Option<&str>, Option<&str>)> = doc
        .root_element()
        .children()
        .filter(|n| n.is_element())
        .map(|row| {
            let label = row
                .children()
                .filter(|n| n.has_tag_name("span"))
                .last()
                .and_then(|n| n.text());
            (row.attribute("data-series"), label)
        })
        .collect();
    assert_eq!(
        rows,
        vec![
            (Some("desktop"), Some("Desktop")),
            (Some("Tablet"), Some("Tablet")),
            (Some("2"), Some("2")),
        ]
    );
    assert_eq!(doc.root_element().attribute("class"), Some("flex justify-center gap-4 pb-3"));
}

#[test]
fn middle_alignment_pads_like_bottom() {
    let cfg = ChartConfig::new();
    let scope = ChartScope::establish(&cfg, ChartId::from_user_id("l"));
    let props = legend_props(json!({
        "verticalAlign": "middle",
        "payload": [{ "value": "a", "color": "#111" }]
    }));
    let html = render_legend(&scope.node(), &props)
        .expect("render")
        .expect("visible legend");
    let doc = roxmltree::Document::parse(&html).expect("well-formed legend");
    assert_eq!(doc.root_element().attribute("class"), Some("flex justify-center gap-4 pt-3"));
}

#[test]
fn swatch_color_cannot_inject_declarations() {
    let cfg = ChartConfig::new();
    let scope = ChartScope::establish(&cfg, ChartId::from_user_id("l"));
    let props = legend_props(json!({
        "payload": [
            { "value": "a", "color": "red; position: fixed; inset: 0" },
            { "value": "b", "color": "hsl(var(--chart-2))" }
        ]
    }));
    let html = render_legend(&scope.node(), &props)
        .expect("render")
        .expect("visible legend");
    let doc = roxmltree::Document::parse(&html).expect("well-formed legend");
    let styles: Vec<Option<&str>> = doc
        .descendants()
        .filter(|n| n.attribute("class") == Some("h-2 w-2 rounded-sm"))
        .map(|n| n.attribute("style"))
        .collect();
    assert_eq!(styles, vec![None, Some("background-color: hsl(var(--chart-2))")]);
}

#[test]
fn empty_or_absent_payload_renders_nothing() {
    let cfg = ChartConfig::new();
    let scope = ChartScope::establish(&cfg, ChartId::from_user_id("l"));
    for value in [json!({}), json!({ "payload": [] }), json!({ "payload": null })] {
        let props = legend_props(value);
        assert_eq!(render_legend(&scope.node(), &props).expect("render"), None);
    }
}

#[test]
fn legend_without_scope_is_an_error() {
    let props = legend_props(json!({ "payload": [{ "value": "a" }] }));
    let err = render_legend(&RenderNode::detached(), &props).unwrap_err();
    assert!(matches!(err, Error::ScopeMissing(_)));
    assert_eq!(
        err.to_string(),
        "chart content must be rendered inside a chart container (no chart scope)"
    );
}
