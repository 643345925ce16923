use thiserror::Error;

// =============================================================================
// Stack errors
// =============================================================================

/// Returned by [`Stack::pop`](crate::Stack::pop) when there is nothing to pop.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("stack is empty")]
pub struct EmptyStackError;

// =============================================================================
// Composite key errors
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// A field was negative or above its bound. Carries the field name and the
    /// rejected value.
    #[error("{field}: {value}")]
    InvalidArgument { field: &'static str, value: i64 },

    #[error("malformed key '{input}': {reason}")]
    Malformed { input: String, reason: String },
}

impl KeyError {
    pub fn invalid_argument(field: &'static str, value: impl Into<i64>) -> Self {
        Self::InvalidArgument {
            field,
            value: value.into(),
        }
    }

    pub fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Configuration errors
// =============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unknown log level '{0}' (expected trace, debug, info, warn or error)")]
    InvalidLevel(String),
}
