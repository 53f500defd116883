//! Error taxonomy for action dispatch

use thiserror::Error;

use crate::ports::BackendError;

/// Errors raised while dispatching or running an action
///
/// Only `UnknownIntent` and `DuplicateIntent` ever leave the crate; the rest
/// are turned into a conversational reply at the handler boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error("Required slot '{0}' is not set")]
    MissingRequiredSlot(String),

    #[error("No handler registered for intent '{0}'")]
    UnknownIntent(String),

    #[error("A handler is already registered for intent '{0}'")]
    DuplicateIntent(String),

    #[error("Backend unavailable: {0}")]
    BackendUnavailable(BackendError),

    #[error("Malformed backend result: {0}")]
    MalformedBackendResult(BackendError),
}

impl From<BackendError> for ActionError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Malformed { .. } => ActionError::MalformedBackendResult(err),
            _ => ActionError::BackendUnavailable(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_backend_errors_map_to_taxonomy() {
        let malformed = BackendError::Malformed {
            service: "device status",
            field: "status".to_string(),
        };
        assert!(matches!(
            ActionError::from(malformed),
            ActionError::MalformedBackendResult(_)
        ));

        let timeout = BackendError::Timeout {
            service: "network status",
            timeout: Duration::from_millis(50),
        };
        assert!(matches!(
            ActionError::from(timeout),
            ActionError::BackendUnavailable(_)
        ));
    }
}
