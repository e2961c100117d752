pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    ConfigShape(#[from] ConfigShapeError),

    #[error("Invalid chart config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid chart config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A config entry (or the registry as a whole) violates the registry shape contract.
///
/// Raised only while a [`crate::ChartConfig`] is being constructed; rendering never produces it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigShapeError {
    #[error("Config entry `{key}` sets both `color` and `theme`; use exactly one")]
    ColorAndTheme { key: String },

    #[error("Config entry `{key}` references unknown theme `{theme}`")]
    UnknownTheme { key: String, theme: String },

    #[error("Config entry `{key}` has an unusable color value {color:?}")]
    UnsafeColor { key: String, color: String },

    #[error("Duplicate series key `{key}`")]
    DuplicateKey { key: String },

    #[error("Series keys must not be empty")]
    EmptyKey,
}
