//! Error type shared by version, qualifier, and range construction

use thiserror::Error;

/// Error type for version parsing and value construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// Qualifier text does not match the qualifier grammar
    #[error("Qualifier '{text}' must match the pattern '{pattern}'")]
    InvalidQualifier { text: String, pattern: &'static str },

    /// Version text does not match the grammar of the requested dialect
    #[error("Version text '{text}' must match the pattern '{pattern}'")]
    GrammarMismatch { text: String, pattern: &'static str },

    /// A numeric component does not fit in an unsigned 32-bit integer
    #[error("Version text '{text}' cannot be parsed: component '{component}' exceeds {max}", max = u32::MAX)]
    NumericOverflow { text: String, component: String },

    /// Version text matched a grammar but carried an invalid qualifier
    #[error("Version text '{text}' cannot be parsed: {source}")]
    InvalidVersionQualifier {
        text: String,
        #[source]
        source: Box<VersionError>,
    },

    /// Lower bound of a range orders after its upper bound
    #[error("Version {lower} must be <= version {upper}")]
    MalformedRange { lower: String, upper: String },
}

impl VersionError {
    /// Check if this error was raised while parsing version text
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            VersionError::GrammarMismatch { .. }
                | VersionError::NumericOverflow { .. }
                | VersionError::InvalidVersionQualifier { .. }
        )
    }

    /// The input text that caused the failure, or `None` for range errors,
    /// which are raised from two already valid versions
    pub fn text(&self) -> Option<&str> {
        match self {
            VersionError::InvalidQualifier { text, .. }
            | VersionError::GrammarMismatch { text, .. }
            | VersionError::NumericOverflow { text, .. }
            | VersionError::InvalidVersionQualifier { text, .. } => Some(text),
            VersionError::MalformedRange { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, VersionError>;
