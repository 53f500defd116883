//! Network status action

use async_trait::async_trait;
use std::sync::Arc;

use super::{backend_failure, intents, ActionHandler, HandlerSettings};
use crate::ports::{with_timeout, NetworkStatusPort};
use crate::value_objects::{Request, Response};

pub const NETWORK_OPERATIONAL: &str =
    "All network systems are currently operational. Are you experiencing specific connectivity issues?";

/// Summarises the state of the corporate network
pub struct NetworkStatusHandler {
    port: Arc<dyn NetworkStatusPort>,
    settings: HandlerSettings,
}

impl NetworkStatusHandler {
    pub fn new(port: Arc<dyn NetworkStatusPort>, settings: HandlerSettings) -> Self {
        Self { port, settings }
    }
}

#[async_trait]
impl ActionHandler for NetworkStatusHandler {
    fn name(&self) -> &'static str {
        intents::CHECK_NETWORK_STATUS
    }

    async fn run(&self, request: &Request) -> Response {
        let lookup = self.port.network_status();
        match with_timeout("network status", self.settings.lookup_timeout, lookup).await {
            Ok(status) if status.is_operational() => Response::text(NETWORK_OPERATIONAL),
            Ok(status) => Response::text(format!(
                "We're experiencing some network issues: {}",
                status.detail
            )),
            Err(err) => backend_failure(self.name(), request, err.into()),
        }
    }
}
