//! Series configuration registry.
//!
//! A [`ChartConfig`] maps each series key (for example `"sales"`) to the display metadata the
//! tooltip, legend and style emitter need: an optional label, an optional icon, and at most one
//! coloring strategy. The coloring is a tagged union ([`Coloring`]), so an entry cannot carry a
//! flat color and a per-theme map at the same time. The loosely shaped caller-facing form
//! (`{ color?, theme? }`) is checked once, when the registry is built.

use crate::error::{ConfigShapeError, Result};
use crate::theme;
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Displayable series label.
///
/// Deserializes from a string, a number (numeric axis categories) or `{ "markup": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Label {
    /// Plain text; escaped when rendered.
    Text(String),
    /// Trusted markup fragment; emitted verbatim.
    Markup { markup: String },
}

impl Label {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn markup(markup: impl Into<String>) -> Self {
        Self::Markup {
            markup: markup.into(),
        }
    }

    /// Empty labels are treated like missing ones by every fallback chain.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(t) => t.is_empty(),
            Self::Markup { markup } => markup.is_empty(),
        }
    }
}

impl<'de> Deserialize<'de> for Label {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum LabelRepr {
            Text(String),
            Int(i64),
            Float(f64),
            Markup { markup: String },
        }

        Ok(match LabelRepr::deserialize(deserializer)? {
            LabelRepr::Text(text) => Self::Text(text),
            LabelRepr::Int(i) => Self::Text(i.to_string()),
            LabelRepr::Float(f) if f.is_finite() => {
                Self::Text(ryu_js::Buffer::new().format_finite(f).to_string())
            }
            LabelRepr::Float(f) => Self::Text(f.to_string()),
            LabelRepr::Markup { markup } => Self::Markup { markup },
        })
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Renderable series marker (trusted markup, e.g. an inline `<svg>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Icon(String);

impl Icon {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_markup(&self) -> &str {
        &self.0
    }
}

/// Theme name -> color, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeColors(IndexMap<String, String>);

impl ThemeColors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, theme: impl Into<String>, color: impl Into<String>) -> Self {
        self.0.insert(theme.into(), color.into());
        self
    }

    pub fn get(&self, theme: &str) -> Option<&str> {
        self.0.get(theme).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// How a series is colored. Exactly one strategy per entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coloring {
    /// The same color under every theme.
    Flat(String),
    /// A color per theme name; themes without an entry get no color.
    Themed(ThemeColors),
}

impl Coloring {
    pub fn color_for(&self, theme_name: &str) -> Option<&str> {
        match self {
            Self::Flat(color) => Some(color),
            Self::Themed(colors) => colors.get(theme_name),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigEntry {
    pub label: Option<Label>,
    pub icon: Option<Icon>,
    pub coloring: Option<Coloring>,
}

impl ConfigEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<Label>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Replaces any previous coloring with a flat color.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.coloring = Some(Coloring::Flat(color.into()));
        self
    }

    /// Replaces any previous coloring with per-theme colors.
    pub fn theme(mut self, colors: ThemeColors) -> Self {
        self.coloring = Some(Coloring::Themed(colors));
        self
    }

    pub fn is_colored(&self) -> bool {
        self.coloring.is_some()
    }

    pub fn color_for_theme(&self, theme_name: &str) -> Option<&str> {
        self.coloring.as_ref()?.color_for(theme_name)
    }

    /// The label, unless it is missing or empty.
    pub fn display_label(&self) -> Option<&Label> {
        self.label.as_ref().filter(|l| !l.is_empty())
    }

    fn validate(&self, key: &str) -> std::result::Result<(), ConfigShapeError> {
        match &self.coloring {
            None => Ok(()),
            Some(Coloring::Flat(color)) => validate_color(key, color),
            Some(Coloring::Themed(colors)) => {
                for (theme_name, color) in colors.iter() {
                    if !theme::is_known_theme(theme_name) {
                        return Err(ConfigShapeError::UnknownTheme {
                            key: key.to_string(),
                            theme: theme_name.to_string(),
                        });
                    }
                    validate_color(key, color)?;
                }
                Ok(())
            }
        }
    }
}

/// Caller-facing entry shape, where `color` and `theme` are two independent optional fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawConfigEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<Label>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon: Option<Icon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<ThemeColors>,
}

impl RawConfigEntry {
    fn into_entry(self, key: &str) -> std::result::Result<ConfigEntry, ConfigShapeError> {
        let coloring = match (self.color, self.theme) {
            (Some(_), Some(_)) => {
                return Err(ConfigShapeError::ColorAndTheme {
                    key: key.to_string(),
                });
            }
            (Some(color), None) => Some(Coloring::Flat(color)),
            (None, Some(colors)) => Some(Coloring::Themed(colors)),
            (None, None) => None,
        };
        Ok(ConfigEntry {
            label: self.label,
            icon: self.icon,
            coloring,
        })
    }
}

impl From<&ConfigEntry> for RawConfigEntry {
    fn from(entry: &ConfigEntry) -> Self {
        let (color, theme) = match &entry.coloring {
            Some(Coloring::Flat(c)) => (Some(c.clone()), None),
            Some(Coloring::Themed(t)) => (None, Some(t.clone())),
            None => (None, None),
        };
        Self {
            label: entry.label.clone(),
            icon: entry.icon.clone(),
            color,
            theme,
        }
    }
}

/// Colors end up inside a CSS declaration, so anything that could close it is rejected.
fn validate_color(key: &str, color: &str) -> std::result::Result<(), ConfigShapeError> {
    if !theme::is_safe_color_value(color) {
        return Err(ConfigShapeError::UnsafeColor {
            key: key.to_string(),
            color: color.to_string(),
        });
    }
    Ok(())
}

/// Series key -> display metadata for one chart instance.
///
/// Iteration follows insertion order. The registry is immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartConfig {
    entries: IndexMap<String, ConfigEntry>,
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<K, I>(entries: I) -> std::result::Result<Self, ConfigShapeError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ConfigEntry)>,
    {
        let mut out = IndexMap::new();
        for (key, entry) in entries {
            let key = key.into();
            if key.is_empty() {
                return Err(ConfigShapeError::EmptyKey);
            }
            entry.validate(&key)?;
            if out.contains_key(&key) {
                return Err(ConfigShapeError::DuplicateKey { key });
            }
            out.insert(key, entry);
        }
        Ok(Self { entries: out })
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let raw: IndexMap<String, RawConfigEntry> = serde_json::from_str(text)?;
        Self::from_raw(raw)
    }

    pub fn from_json_value(value: &Value) -> Result<Self> {
        let raw = IndexMap::<String, RawConfigEntry>::deserialize(value)?;
        Self::from_raw(raw)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let raw: IndexMap<String, RawConfigEntry> = serde_yaml::from_str(text)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: IndexMap<String, RawConfigEntry>) -> Result<Self> {
        let mut entries = Vec::with_capacity(raw.len());
        for (key, raw_entry) in raw {
            match raw_entry.into_entry(&key) {
                Ok(entry) => entries.push((key, entry)),
                Err(err) => {
                    tracing::warn!(series = %key, error = %err, "rejecting chart config entry");
                    return Err(err.into());
                }
            }
        }
        let config = Self::from_entries(entries)?;
        tracing::debug!(entries = config.len(), "loaded chart config");
        Ok(config)
    }

    pub fn get(&self, key: &str) -> Option<&ConfigEntry> {
        self.entries.get(key)
    }

    /// Like [`ChartConfig::get`], also returning the registry's own key.
    pub fn get_key_value(&self, key: &str) -> Option<(&str, &ConfigEntry)> {
        self.entries.get_key_value(key).map(|(k, v)| (k.as_str(), v))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any entry supplies a flat color or a theme map.
    pub fn has_colors(&self) -> bool {
        self.entries.values().any(ConfigEntry::is_colored)
    }
}

impl Serialize for ChartConfig {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entry) in &self.entries {
            map.serialize_entry(key, &RawConfigEntry::from(entry))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ChartConfig {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = IndexMap::<String, RawConfigEntry>::deserialize(deserializer)?;
        let mut entries = Vec::with_capacity(raw.len());
        for (key, raw_entry) in raw {
            let entry = raw_entry.into_entry(&key).map_err(serde::de::Error::custom)?;
            entries.push((key, entry));
        }
        Self::from_entries(entries).map_err(serde::de::Error::custom)
    }
}
