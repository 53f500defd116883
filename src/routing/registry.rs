//! Intent-to-handler registry

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::error::ActionError;
use crate::handlers::{
    ActionHandler, DeviceStatusHandler, HandlerSettings, NetworkStatusHandler,
    SoftwareCompatibilityHandler, SupportTicketHandler,
};
use crate::ports::Backends;
use crate::value_objects::{Request, Response};

/// Collects handler registrations before serving starts
#[derive(Default)]
pub struct RegistryBuilder {
    handlers: HashMap<String, Arc<dyn ActionHandler>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under an explicit intent name
    pub fn register(
        &mut self,
        intent: impl Into<String>,
        handler: Arc<dyn ActionHandler>,
    ) -> Result<&mut Self, ActionError> {
        let intent = intent.into();
        if self.handlers.contains_key(&intent) {
            return Err(ActionError::DuplicateIntent(intent));
        }

        debug!(intent = %intent, handler = handler.name(), "Registering action handler");
        self.handlers.insert(intent, handler);
        Ok(self)
    }

    /// Register a handler under its own name
    pub fn register_handler(
        &mut self,
        handler: Arc<dyn ActionHandler>,
    ) -> Result<&mut Self, ActionError> {
        self.register(handler.name(), handler)
    }

    /// Freeze the registrations
    pub fn build(self) -> HandlerRegistry {
        info!(handlers = self.handlers.len(), "Handler registry ready");
        HandlerRegistry {
            handlers: self.handlers,
        }
    }
}

/// Read-only map from intent name to handler
pub struct HandlerRegistry {
    handlers: HashMap<String, Arc<dyn ActionHandler>>,
}

impl HandlerRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Registry with the four IT-support actions wired to `backends`
    pub fn standard(backends: &Backends, settings: HandlerSettings) -> Self {
        let handlers: [Arc<dyn ActionHandler>; 4] = [
            Arc::new(DeviceStatusHandler::new(backends.device_status.clone(), settings)),
            Arc::new(SupportTicketHandler::new(
                backends.tickets.clone(),
                backends.clock.clone(),
                settings,
            )),
            Arc::new(SoftwareCompatibilityHandler::new(
                backends.compatibility.clone(),
                settings,
            )),
            Arc::new(NetworkStatusHandler::new(backends.network_status.clone(), settings)),
        ];

        let handlers = handlers
            .into_iter()
            .map(|handler| (handler.name().to_string(), handler))
            .collect::<HashMap<_, _>>();

        info!(handlers = handlers.len(), "Handler registry ready");
        Self { handlers }
    }

    /// Run the handler registered for `intent`
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::UnknownIntent`] when nothing is registered for
    /// the intent. Every other failure is answered inside the handler.
    #[tracing::instrument(
        name = "dispatch",
        skip(self, request),
        fields(conversation_id = %request.conversation_id)
    )]
    pub async fn dispatch(&self, intent: &str, request: &Request) -> Result<Response, ActionError> {
        let Some(handler) = self.handlers.get(intent) else {
            error!("No handler registered for intent");
            return Err(ActionError::UnknownIntent(intent.to_string()));
        };

        let response = handler.run(request).await;
        debug!(
            slot_updates = response.slot_updates.len(),
            "Action handled"
        );
        Ok(response)
    }

    pub fn contains(&self, intent: &str) -> bool {
        self.handlers.contains_key(intent)
    }

    /// Registered intent names, sorted
    pub fn intents(&self) -> Vec<&str> {
        let mut intents: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        intents.sort_unstable();
        intents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::intents;
    use crate::ports::MockNetworkStatusPort;

    fn network_handler() -> Arc<dyn ActionHandler> {
        Arc::new(NetworkStatusHandler::new(
            Arc::new(MockNetworkStatusPort::new()),
            HandlerSettings::default(),
        ))
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let mut builder = HandlerRegistry::builder();
        builder.register_handler(network_handler()).unwrap();

        let err = builder
            .register(intents::CHECK_NETWORK_STATUS, network_handler())
            .err();

        assert_eq!(
            err,
            Some(ActionError::DuplicateIntent(
                intents::CHECK_NETWORK_STATUS.to_string()
            ))
        );
    }

    #[test]
    fn test_handler_can_serve_an_alias() {
        let mut builder = HandlerRegistry::builder();
        builder
            .register_handler(network_handler())
            .unwrap()
            .register("action_network_outage", network_handler())
            .unwrap();
        let registry = builder.build();

        assert_eq!(
            registry.intents(),
            vec!["action_check_network_status", "action_network_outage"]
        );
    }

    #[test]
    fn test_standard_registry_covers_all_actions() {
        let registry = HandlerRegistry::standard(&Backends::mock(), HandlerSettings::default());

        for intent in [
            intents::CHECK_DEVICE_STATUS,
            intents::CREATE_SUPPORT_TICKET,
            intents::CHECK_SOFTWARE_COMPATIBILITY,
            intents::CHECK_NETWORK_STATUS,
        ] {
            assert!(registry.contains(intent), "missing {intent}");
        }
        assert_eq!(registry.intents().len(), 4);
    }
}
