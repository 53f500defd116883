//! Software compatibility action

use async_trait::async_trait;
use std::sync::Arc;

use super::{backend_failure, intents, ActionHandler, HandlerSettings};
use crate::ports::{with_timeout, CompatibilityPort};
use crate::value_objects::{slots, Request, Response};

pub const ASK_FOR_SOFTWARE: &str = "Which software are you trying to install?";

/// Checks whether the software in the `software` slot can be installed
pub struct SoftwareCompatibilityHandler {
    port: Arc<dyn CompatibilityPort>,
    settings: HandlerSettings,
}

impl SoftwareCompatibilityHandler {
    pub fn new(port: Arc<dyn CompatibilityPort>, settings: HandlerSettings) -> Self {
        Self { port, settings }
    }
}

#[async_trait]
impl ActionHandler for SoftwareCompatibilityHandler {
    fn name(&self) -> &'static str {
        intents::CHECK_SOFTWARE_COMPATIBILITY
    }

    async fn run(&self, request: &Request) -> Response {
        let Ok(software) = request.require_slot(slots::SOFTWARE) else {
            return Response::text(ASK_FOR_SOFTWARE);
        };

        let lookup = self.port.check_compatibility(software);
        let compatibility =
            match with_timeout("compatibility", self.settings.lookup_timeout, lookup).await {
                Ok(compatibility) => compatibility,
                Err(err) => return backend_failure(self.name(), request, err.into()),
            };

        if compatibility.compatible {
            Response::text(format!(
                "{software} is compatible with your system. Would you like installation instructions?"
            ))
            .with_slot_update(slots::SOFTWARE, software)
        } else {
            // Incompatible software is not kept in the tracker
            Response::text(format!(
                "There might be compatibility issues with {software}. {}",
                compatibility.detail
            ))
        }
    }
}
