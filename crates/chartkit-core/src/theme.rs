/// One supported theme mode and the ancestor selector that activates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    /// Selector prepended to the chart scope selector. Empty for the default (root) theme.
    pub selector_prefix: &'static str,
}

pub const LIGHT: Theme = Theme {
    name: "light",
    selector_prefix: "",
};

pub const DARK: Theme = Theme {
    name: "dark",
    selector_prefix: ".dark",
};

/// Every theme the style emitter generates a rule for, in emission order.
pub const THEMES: &[Theme] = &[LIGHT, DARK];

pub fn find_theme(name: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.name == name)
}

pub fn is_known_theme(name: &str) -> bool {
    find_theme(name).is_some()
}

/// Name of the custom property carrying a series color, e.g. `--color-sales`.
///
/// ASCII characters outside `[A-Za-z0-9_-]` are backslash-escaped so any series key yields a valid
/// property name.
pub fn color_variable(series_key: &str) -> String {
    let mut out = String::with_capacity(series_key.len() + 8);
    out.push_str("--color-");
    for ch in series_key.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || !ch.is_ascii() {
            out.push(ch);
        } else {
            out.push('\\');
            out.push(ch);
        }
    }
    out
}

/// Whether `color` can sit inside a single CSS declaration without closing it or the element
/// around it.
pub fn is_safe_color_value(color: &str) -> bool {
    !color.trim().is_empty()
        && !color.contains(|c: char| matches!(c, ';' | '{' | '}' | '<' | '>' | '\n' | '\r'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_is_first_and_unprefixed() {
        assert_eq!(THEMES[0], LIGHT);
        assert!(THEMES[0].selector_prefix.is_empty());
        assert_eq!(find_theme("dark").map(|t| t.selector_prefix), Some(".dark"));
        assert!(find_theme("sepia").is_none());
    }

    #[test]
    fn color_variable_escapes_punctuation() {
        assert_eq!(color_variable("sales"), "--color-sales");
        assert_eq!(color_variable("mobile_2"), "--color-mobile_2");
        assert_eq!(color_variable("a b.c"), "--color-a\\ b\\.c");
    }

    #[test]
    fn unsafe_color_values() {
        assert!(is_safe_color_value("#2563eb"));
        assert!(is_safe_color_value("hsl(var(--chart-1))"));
        for bad in ["", " ", "red; inset: 0", "red}", "<b>", "red\nblue"] {
            assert!(!is_safe_color_value(bad), "{bad:?}");
        }
    }
}
