use std::path::PathBuf;

/// Convenience result type used across brandgen.
pub type BrandgenResult<T> = Result<T, BrandgenError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum BrandgenError {
    /// The source logo file does not exist at the expected path.
    #[error("missing input: '{0}' not found")]
    MissingInput(PathBuf),

    /// Invalid user-provided parameters (dimensions, fractions, colors).
    #[error("validation error: {0}")]
    Validation(String),

    /// None of the candidate font paths resolved. Non-fatal at call sites:
    /// the OG preset degrades to a logo-only image.
    #[error("font resolution error: {0}")]
    FontResolution(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BrandgenError {
    /// Build a [`BrandgenError::MissingInput`] value.
    pub fn missing_input(path: impl Into<PathBuf>) -> Self {
        Self::MissingInput(path.into())
    }

    /// Build a [`BrandgenError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BrandgenError::FontResolution`] value.
    pub fn font_resolution(msg: impl Into<String>) -> Self {
        Self::FontResolution(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            BrandgenError::missing_input("public/logo.png")
                .to_string()
                .contains("missing input:")
        );
        assert!(
            BrandgenError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            BrandgenError::font_resolution("x")
                .to_string()
                .contains("font resolution error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = BrandgenError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
