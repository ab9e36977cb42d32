/// Convenience result type used across the crate.
pub type JungleResult<T> = Result<T, JungleError>;

/// Error taxonomy for the fallible edges of the engine (catalog loading and rendering).
///
/// Layout, bond resolution and viewport updates never fail.
#[derive(thiserror::Error, Debug)]
pub enum JungleError {
    /// Catalog data that breaks an identity invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing catalog or scene data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors while producing or rasterizing a snapshot.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl JungleError {
    /// Build a [`JungleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`JungleError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`JungleError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

impl From<serde_json::Error> for JungleError {
    fn from(value: serde_json::Error) -> Self {
        Self::serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
