/// Convenience result type used across the crate.
pub type FieldResult<T> = Result<T, FieldError>;

/// Top-level error taxonomy.
///
/// Every variant except [`FieldError::Other`] is raised at construction time or at a checked
/// entry point; the per-frame recompute path cannot fail once its inputs are validated.
#[derive(thiserror::Error, Debug)]
pub enum FieldError {
    /// Invalid construction parameters (dimensions, durations, domains, value ids).
    #[error("configuration error: {0}")]
    Config(String),

    /// Missing or undecodable source image.
    #[error("resource load error: {0}")]
    ResourceLoad(String),

    /// Non-finite time, phase or position passed to a field function.
    #[error("numeric domain error: {0}")]
    NumericDomain(String),

    /// Errors when serializing frame descriptions.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FieldError {
    /// Build a [`FieldError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`FieldError::ResourceLoad`] value.
    pub fn resource_load(msg: impl Into<String>) -> Self {
        Self::ResourceLoad(msg.into())
    }

    /// Build a [`FieldError::NumericDomain`] value.
    pub fn numeric_domain(msg: impl Into<String>) -> Self {
        Self::NumericDomain(msg.into())
    }

    /// Build a [`FieldError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
