use chartkit_core::Label;
use std::borrow::Cow;

pub(crate) fn escape_text(text: &str) -> Cow<'_, str> {
    htmlize::escape_text(text)
}

pub(crate) fn escape_attr(text: &str) -> Cow<'_, str> {
    htmlize::escape_attribute(text)
}

/// Joins class lists, skipping empty ones.
pub fn class_names<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for part in parts {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

/// Text labels are escaped; markup labels are trusted and copied as-is.
pub(crate) fn push_label(out: &mut String, label: &Label) {
    match label {
        Label::Text(text) => out.push_str(&escape_text(text)),
        Label::Markup { markup } => out.push_str(markup),
    }
}
