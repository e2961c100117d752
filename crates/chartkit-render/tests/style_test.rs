use chartkit_core::{ChartConfig, ChartId, THEMES};
use chartkit_render::emit_chart_style;
use serde_json::json;

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn one_rule_per_theme_with_one_declaration_per_resolvable_entry() {
    let cfg = ChartConfig::from_json_value(&json!({
        "desktop": { "label": "Desktop", "color": "hsl(var(--chart-1))" },
        "mobile": { "label": "Mobile", "theme": { "light": "#60a5fa", "dark": "#1e3a8a" } },
        "tablet": { "label": "Tablet", "theme": { "dark": "#7c3aed" } },
        "other": { "label": "Other" }
    }))
    .expect("config");
    let id = ChartId::from_user_id("traffic");
    let css = emit_chart_style(&cfg, &id);

    assert_eq!(count(&css, "[data-chart=chart-traffic] {"), THEMES.len());
    assert_eq!(count(&css, ".dark [data-chart=chart-traffic] {"), 1);

    let rules: Vec<&str> = css.split("\n\n").collect();
    assert_eq!(rules.len(), THEMES.len());
    let light = rules[0];
    let dark = rules[1];

    assert!(light.starts_with("[data-chart=chart-traffic] {"));
    assert_eq!(count(light, "--color-"), 2);
    assert!(light.contains("  --color-desktop: hsl(var(--chart-1));\n"));
    assert!(light.contains("  --color-mobile: #60a5fa;\n"));

    assert!(dark.starts_with(".dark [data-chart=chart-traffic] {"));
    assert_eq!(count(dark, "--color-"), 3);
    assert!(dark.contains("  --color-mobile: #1e3a8a;\n"));
    assert!(dark.contains("  --color-tablet: #7c3aed;\n"));
    assert!(!css.contains("--color-other"));
}

#[test]
fn declarations_follow_registry_order_and_are_reproducible() {
    let cfg = ChartConfig::from_json_str(
        r##"{ "zeta": { "color": "#000" }, "alpha": { "color": "#fff" } }"##,
    )
    .expect("config");
    let id = ChartId::from_user_id("ord");
    let first = emit_chart_style(&cfg, &id);
    let second = emit_chart_style(&cfg, &id);
    assert_eq!(first.as_bytes(), second.as_bytes());

    let zeta = first.find("--color-zeta").expect("zeta");
    let alpha = first.find("--color-alpha").expect("alpha");
    assert!(zeta < alpha);
}

#[test]
fn empty_iff_no_entry_is_colored() {
    let id = ChartId::from_user_id("e");
    let uncolored = ChartConfig::from_json_value(&json!({ "a": {}, "b": { "label": "B" } }))
        .expect("config");
    assert_eq!(emit_chart_style(&uncolored, &id), "");
    assert_eq!(emit_chart_style(&ChartConfig::new(), &id), "");

    let one_colored = ChartConfig::from_json_value(&json!({ "a": {}, "b": { "color": "red" } }))
        .expect("config");
    assert!(!emit_chart_style(&one_colored, &id).is_empty());
}

#[test]
fn co_mounted_instances_get_distinct_scopes() {
    let cfg = ChartConfig::from_json_value(&json!({ "a": { "color": "red" } })).expect("config");
    let first = ChartId::generate();
    let second = ChartId::generate();
    assert_ne!(first, second);
    assert_ne!(emit_chart_style(&cfg, &first), emit_chart_style(&cfg, &second));
}
