use std::fmt;
use uuid::Uuid;

/// Identifier of one mounted chart instance, always of the form `chart-<suffix>`.
///
/// The value is used as an unquoted CSS attribute selector value (`[data-chart=chart-x]`), so it
/// only ever contains ASCII letters, digits, `-` and `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChartId(String);

impl ChartId {
    /// Fresh id for an instance without a caller-chosen id. Unique across co-mounted charts.
    pub fn generate() -> Self {
        Self(format!("chart-{}", Uuid::new_v4().simple()))
    }

    /// Uses the caller id when it survives sanitizing, otherwise generates one.
    pub fn from_user_id(raw: &str) -> Self {
        match sanitize_id_suffix(raw) {
            Some(suffix) => Self(format!("chart-{suffix}")),
            None => Self::generate(),
        }
    }

    pub fn new(user_id: Option<&str>) -> Self {
        match user_id {
            Some(raw) => Self::from_user_id(raw),
            None => Self::generate(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ChartId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Reduces a caller id to `[A-Za-z0-9_-]`: unsupported characters become `-`, runs of `-`
/// collapse, and leading/trailing `-` are dropped. Returns `None` when nothing is left.
pub fn sanitize_id_suffix(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.trim().chars() {
        let ok = ch.is_ascii_alphanumeric() || ch == '-' || ch == '_';
        let ch = if ok { ch } else { '-' };
        if ch == '-' && out.ends_with('-') {
            continue;
        }
        out.push(ch);
    }
    let out = out.trim_matches('-');
    if out.is_empty() {
        None
    } else {
        Some(out.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_ids_are_sanitized() {
        assert_eq!(ChartId::from_user_id("revenue").as_str(), "chart-revenue");
        assert_eq!(ChartId::from_user_id(":r1:").as_str(), "chart-r1");
        assert_eq!(ChartId::from_user_id(" a b..c ").as_str(), "chart-a-b-c");
        assert_eq!(ChartId::from_user_id("x_1-2").as_str(), "chart-x_1-2");
    }

    #[test]
    fn unusable_user_ids_fall_back_to_generated() {
        let id = ChartId::from_user_id(":::");
        assert!(id.as_str().starts_with("chart-"));
        assert_eq!(id.as_str().len(), "chart-".len() + 32);
    }

    #[test]
    fn generated_ids_do_not_collide() {
        let ids: std::collections::HashSet<_> = (0..256).map(|_| ChartId::generate()).collect();
        assert_eq!(ids.len(), 256);
        for id in &ids {
            assert!(
                id.as_str()
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-')
            );
        }
    }
}
