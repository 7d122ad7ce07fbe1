/// Crate-wide result alias.
pub type AuroraResult<T> = Result<T, AuroraError>;

/// Top-level error type.
#[derive(thiserror::Error, Debug)]
pub enum AuroraError {
    /// The drawing surface is missing or cannot be rasterized.
    #[error("surface error: {0}")]
    Surface(String),

    /// A preset, color or other input value is out of range.
    #[error("validation error: {0}")]
    Validation(String),

    /// An operation was attempted in the wrong lifecycle state.
    #[error("lifecycle error: {0}")]
    Lifecycle(String),

    /// Rasterization failed.
    #[error("render error: {0}")]
    Render(String),

    /// Engine configuration could not be loaded or is inconsistent.
    #[error("config error: {0}")]
    Config(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped foreign error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AuroraError {
    /// Build a [`AuroraError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`AuroraError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`AuroraError::Lifecycle`] value.
    pub fn lifecycle(msg: impl Into<String>) -> Self {
        Self::Lifecycle(msg.into())
    }

    /// Build a [`AuroraError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`AuroraError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`AuroraError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
