//! Payload item -> config entry resolution.
//!
//! A miss is never an error: series the caller forgot to register still render, using the raw
//! payload fields.

use crate::config::{ChartConfig, ConfigEntry, Label};
use crate::payload::PayloadFields;
use crate::theme::color_variable;

/// Looks an item up by data key, then series name, then `fallback_key`, returning the first
/// candidate present in `config`.
pub fn resolve<'c, P>(
    config: &'c ChartConfig,
    item: &P,
    fallback_key: &str,
) -> Option<&'c ConfigEntry>
where
    P: PayloadFields + ?Sized,
{
    resolve_keyed(config, item, fallback_key).map(|(_, entry)| entry)
}

fn resolve_keyed<'c, P>(
    config: &'c ChartConfig,
    item: &P,
    fallback_key: &str,
) -> Option<(&'c str, &'c ConfigEntry)>
where
    P: PayloadFields + ?Sized,
{
    [item.data_key(), item.series_name(), Some(fallback_key)]
        .into_iter()
        .flatten()
        .find_map(|key| config.get_key_value(key))
}

/// Resolution of one payload item at a known position in its payload list.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<'c> {
    /// Display key: the first present of data key, series name, stringified position.
    pub key: String,
    /// Registry key the entry was found under. Can differ from `key` when the data key missed.
    pub matched_key: Option<&'c str>,
    pub entry: Option<&'c ConfigEntry>,
}

impl<'c> Resolution<'c> {
    pub fn new<P>(config: &'c ChartConfig, item: &P, index: usize) -> Self
    where
        P: PayloadFields + ?Sized,
    {
        let fallback = index.to_string();
        let key = item
            .data_key()
            .or_else(|| item.series_name())
            .unwrap_or(fallback.as_str())
            .to_string();
        let (matched_key, entry) = match resolve_keyed(config, item, &fallback) {
            Some((matched, entry)) => (Some(matched), Some(entry)),
            None => {
                tracing::trace!(series = %key, index, "payload item has no chart config entry");
                (None, None)
            }
        };
        Self {
            key,
            matched_key,
            entry,
        }
    }

    /// Label priority: config label, then the surface's series name, then the display key.
    pub fn label<P>(&self, item: &P) -> Label
    where
        P: PayloadFields + ?Sized,
    {
        if let Some(label) = self.entry.and_then(ConfigEntry::display_label) {
            return label.clone();
        }
        Label::text(item.series_name().unwrap_or(self.key.as_str()))
    }

    pub fn display_item<P>(&self, item: &P) -> ResolvedDisplayItem
    where
        P: PayloadFields + ?Sized,
    {
        let color = match item.raw_color() {
            Some(c) => Some(c.to_string()),
            None => self
                .matched_key
                .zip(self.entry)
                .filter(|(_, e)| e.is_colored())
                .map(|(matched, _)| format!("var({})", color_variable(matched))),
        };
        ResolvedDisplayItem {
            key: self.key.clone(),
            label: self.label(item),
            color,
            numeric_value: item.numeric_value(),
        }
    }
}

/// What a renderer shows for one payload item.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDisplayItem {
    pub key: String,
    pub label: Label,
    /// The surface's color, else the series' scoped custom property when it is colored.
    pub color: Option<String>,
    pub numeric_value: Option<f64>,
}

/// Resolves a whole payload list in input order.
pub fn resolve_all<'i, P>(
    config: &ChartConfig,
    items: &'i [P],
) -> Vec<(&'i P, ResolvedDisplayItem)>
where
    P: PayloadFields,
{
    items
        .iter()
        .enumerate()
        .map(|(i, item)| (item, Resolution::new(config, item, i).display_item(item)))
        .collect()
}
