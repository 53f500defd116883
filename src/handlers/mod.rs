//! Action handlers
//!
//! Every handler follows the same single-transition shape: read the slots it
//! needs, consult one backend port, and answer with exactly one message.
//! Backend failures are contained here; the caller always gets a `Response`.

pub mod device_status;
pub mod network_status;
pub mod software_compatibility;
pub mod support_ticket;

pub use device_status::DeviceStatusHandler;
pub use network_status::NetworkStatusHandler;
pub use software_compatibility::SoftwareCompatibilityHandler;
pub use support_ticket::SupportTicketHandler;

use async_trait::async_trait;
use std::time::Duration;
use tracing::error;

use crate::config::ActionsConfig;
use crate::error::ActionError;
use crate::value_objects::{Request, Response};

/// Intent names the handlers are registered under
pub mod intents {
    pub const CHECK_DEVICE_STATUS: &str = "action_check_device_status";
    pub const CREATE_SUPPORT_TICKET: &str = "action_create_support_ticket";
    pub const CHECK_SOFTWARE_COMPATIBILITY: &str = "action_check_software_compatibility";
    pub const CHECK_NETWORK_STATUS: &str = "action_check_network_status";
}

/// Reply used whenever a backend lookup fails
pub const BACKEND_FAILURE_MESSAGE: &str =
    "Sorry, I couldn't reach our support systems right now. Please try again in a few minutes.";

/// Capability every action handler provides to the registry
#[async_trait]
pub trait ActionHandler: Send + Sync {
    /// Intent name this handler answers
    fn name(&self) -> &'static str;

    /// Produce the reply for one invocation
    async fn run(&self, request: &Request) -> Response;
}

/// Settings shared by all handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerSettings {
    /// Deadline applied to each backend lookup
    pub lookup_timeout: Duration,
}

impl Default for HandlerSettings {
    fn default() -> Self {
        Self::from(&ActionsConfig::default())
    }
}

impl From<&ActionsConfig> for HandlerSettings {
    fn from(config: &ActionsConfig) -> Self {
        Self {
            lookup_timeout: config.backend.lookup_timeout(),
        }
    }
}

/// Log a failed lookup for operators and answer the user with an apology
pub(crate) fn backend_failure(intent: &'static str, request: &Request, err: ActionError) -> Response {
    error!(
        intent,
        conversation_id = %request.conversation_id,
        error = %err,
        "Backend lookup failed"
    );
    Response::text(BACKEND_FAILURE_MESSAGE)
}
