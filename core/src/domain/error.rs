//! Domain error taxonomy.
//!
//! Four categories cover every failure the core surfaces: transport,
//! missing records, illegal lifecycle transitions, and client-side
//! validation. Adapters map their own error enums into these before a
//! failure crosses the domain boundary.

use thiserror::Error;

use super::ports::RepositoryError;

/// Failure raised by domain services and adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Network failure or a non-2xx response from the remote store.
    #[error("transport failure: {message}")]
    Transport {
        /// Adapter-supplied description of the failure.
        message: String,
    },
    /// A record with the given id does not exist.
    #[error("{resource} {id} not found")]
    NotFound {
        /// Resource collection that was queried.
        resource: &'static str,
        /// Id that matched nothing.
        id: String,
    },
    /// A lifecycle transition was attempted outside its allowed
    /// (actor, precondition) pair. Persisted state is untouched.
    #[error("precondition failed: {message}")]
    PreconditionFailed {
        /// What was violated.
        message: String,
    },
    /// Client-side input failed a required/format check. Never sent to
    /// the server; rendered next to the offending field.
    #[error("validation failed for {field}: {message}")]
    Validation {
        /// Offending input field.
        field: &'static str,
        /// What the field must satisfy.
        message: String,
    },
}

impl Error {
    /// Helper for transport failures.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Helper for missing records.
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Helper for illegal lifecycle transitions.
    pub fn precondition_failed(message: impl Into<String>) -> Self {
        Self::PreconditionFailed {
            message: message.into(),
        }
    }

    /// Helper for client-side validation failures.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}

impl From<RepositoryError> for Error {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::Transport { message } => Self::Transport { message },
            RepositoryError::NotFound { resource, id } => Self::NotFound { resource, id },
            // Malformed payloads are a transport-level concern from the
            // domain's point of view; the distinction only matters inside
            // the adapter.
            RepositoryError::Decode { message } => Self::Transport { message },
        }
    }
}
