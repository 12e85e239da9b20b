use thiserror::Error;

/// Failure taxonomy shared by every value provider.
///
/// Only [`ProviderError::InvalidArity`] and [`ProviderError::UnknownComponent`]
/// ever reach the host engine (through input validation). The remaining
/// variants are produced inside the external state bridge, logged, and turned
/// into "no value".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The input did not contain exactly two arguments.
    #[error("expected two arguments (component id and key), got {actual}")]
    InvalidArity { actual: usize },
    /// The first argument does not name a registered module or content pack.
    #[error("mod or content pack '{0}' not found")]
    UnknownComponent(String),
    /// A structured lookup found no value at the requested path.
    #[error("'{component}' has no value at '{path}'")]
    MissingPath { component: String, path: String },
    /// A collaborator failed while serving a request.
    #[error("'{component}' failed while {operation}: {message}")]
    ExternalFailure {
        component: String,
        operation: &'static str,
        message: String,
    },
}

impl ProviderError {
    /// Whether this error is surfaced to the host engine as a validation
    /// message rather than swallowed.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, ProviderError::InvalidArity { .. } | ProviderError::UnknownComponent(_))
    }
}
