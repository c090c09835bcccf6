/// Convenience result type used across mockupgen.
pub type MockupResult<T> = Result<T, MockupError>;

/// Fatal error taxonomy for a render. Any of these aborts the render with no partial output.
#[derive(thiserror::Error, Debug)]
pub enum MockupError {
    /// The screenshot or base photo could not be decoded.
    #[error("decode failure: {0}")]
    DecodeFailure(String),

    /// A decoded buffer could not be coerced to 8-bit RGBA.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The template is broken: bad record, undecodable mask, or degenerate screen quad.
    #[error("invalid template asset: {0}")]
    InvalidTemplateAsset(String),

    /// Per-invocation render settings are out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MockupError {
    /// Build a [`MockupError::DecodeFailure`] value.
    pub fn decode_failure(msg: impl Into<String>) -> Self {
        Self::DecodeFailure(msg.into())
    }

    /// Build a [`MockupError::UnsupportedFormat`] value.
    pub fn unsupported_format(msg: impl Into<String>) -> Self {
        Self::UnsupportedFormat(msg.into())
    }

    /// Build a [`MockupError::InvalidTemplateAsset`] value.
    pub fn invalid_template(msg: impl Into<String>) -> Self {
        Self::InvalidTemplateAsset(msg.into())
    }

    /// Build a [`MockupError::InvalidConfig`] value.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
