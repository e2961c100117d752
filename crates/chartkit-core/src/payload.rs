//! Records emitted by the plotting surface when it calls back into the tooltip and legend.
//!
//! The surface does not guarantee any field; every field is optional and unknown fields are
//! ignored. Absent-field handling (including treating empty strings as absent) lives in
//! [`PayloadFields`] so the resolver and renderers never inspect raw fields directly.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Raw value of one plotted point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PayloadValue {
    Number(f64),
    Text(String),
    /// Ranges, objects and anything else the surface may hand over.
    Other(Value),
}

impl PayloadValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<f64> for PayloadValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for PayloadValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for PayloadValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One tooltip entry as produced by the plotting surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPayloadItem {
    #[serde(default, deserialize_with = "de_opt_key", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de_opt_key", skip_serializing_if = "Option::is_none")]
    pub data_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<PayloadValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// The full data row the point came from. Opaque to this crate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

/// One legend entry as produced by the plotting surface.
///
/// `value` is the series name the surface shows for the entry, not a data value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLegendItem {
    #[serde(default, deserialize_with = "de_opt_key", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, deserialize_with = "de_opt_key", skip_serializing_if = "Option::is_none")]
    pub data_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub legend_type: Option<String>,
}

/// Uniform, absent-aware access to the fields resolution depends on.
pub trait PayloadFields {
    fn data_key(&self) -> Option<&str>;
    /// The name the surface gave the series (`name` for tooltips, `value` for legends).
    fn series_name(&self) -> Option<&str>;
    fn raw_color(&self) -> Option<&str>;
    /// The plotted value, only when it is a number.
    fn numeric_value(&self) -> Option<f64> {
        None
    }
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

impl PayloadFields for RawPayloadItem {
    fn data_key(&self) -> Option<&str> {
        non_empty(&self.data_key)
    }

    fn series_name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    fn raw_color(&self) -> Option<&str> {
        non_empty(&self.color)
    }

    fn numeric_value(&self) -> Option<f64> {
        self.value.as_ref()?.as_number()
    }
}

impl PayloadFields for RawLegendItem {
    fn data_key(&self) -> Option<&str> {
        non_empty(&self.data_key)
    }

    fn series_name(&self) -> Option<&str> {
        non_empty(&self.value)
    }

    fn raw_color(&self) -> Option<&str> {
        non_empty(&self.color)
    }
}

/// Keys and names arrive as strings or numbers; both become strings.
fn de_opt_key<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum KeyRepr {
        Str(String),
        Int(i64),
        Float(f64),
        Other(Value),
    }

    Ok(match Option::<KeyRepr>::deserialize(deserializer)? {
        None => None,
        Some(KeyRepr::Str(s)) => Some(s),
        Some(KeyRepr::Int(i)) => Some(i.to_string()),
        Some(KeyRepr::Float(f)) if f.is_finite() => {
            Some(ryu_js::Buffer::new().format_finite(f).to_string())
        }
        Some(KeyRepr::Float(_)) | Some(KeyRepr::Other(_)) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tooltip_item_tolerates_missing_and_foreign_fields() {
        let item: RawPayloadItem = serde_json::from_value(json!({
            "dataKey": "sales",
            "value": 42,
            "fill": "#fff",
            "payload": { "month": "March", "sales": 42 }
        }))
        .unwrap();
        assert_eq!(item.data_key(), Some("sales"));
        assert_eq!(item.series_name(), None);
        assert_eq!(item.numeric_value(), Some(42.0));
        assert!(item.payload.is_some());

        let empty: RawPayloadItem = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty, RawPayloadItem::default());
    }

    #[test]
    fn numeric_keys_become_strings() {
        let item: RawPayloadItem =
            serde_json::from_value(json!({ "dataKey": 2, "name": 1.5 })).unwrap();
        assert_eq!(item.data_key.as_deref(), Some("2"));
        assert_eq!(item.name.as_deref(), Some("1.5"));
    }

    #[test]
    fn non_numeric_values_are_not_numbers() {
        for v in [json!("42"), json!([1, 2]), json!({ "a": 1 })] {
            let item: RawPayloadItem = serde_json::from_value(json!({ "value": v })).unwrap();
            assert_eq!(item.numeric_value(), None);
        }
        let item: RawPayloadItem = serde_json::from_value(json!({ "value": null })).unwrap();
        assert!(item.value.is_none());
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let item = RawLegendItem {
            value: Some(String::new()),
            data_key: Some(String::new()),
            color: Some(String::new()),
            legend_type: None,
        };
        assert_eq!(item.data_key(), None);
        assert_eq!(item.series_name(), None);
        assert_eq!(item.raw_color(), None);
    }

    #[test]
    fn legend_type_uses_wire_name() {
        let item: RawLegendItem =
            serde_json::from_value(json!({ "value": "Sales", "type": "square", "color": "#f00" }))
                .unwrap();
        assert_eq!(item.legend_type.as_deref(), Some("square"));
        assert_eq!(item.series_name(), Some("Sales"));
    }
}
