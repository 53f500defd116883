//! IT-support action handlers
//!
//! Custom actions invoked by a conversational-AI dialogue manager. Given an
//! intent and a snapshot of the conversation's slots, a handler consults one
//! backend system and answers with a single message plus optional slot
//! updates. It provides:
//! - A startup-time registry mapping intent names to handlers
//! - Device status, support ticket, software compatibility and network
//!   status actions
//! - Backend ports with canned in-memory and JSON inventory implementations
//! - Layered configuration for backend selection, lookup timeouts and ticket
//!   numbering
//!
//! Natural-language understanding, dialogue state and the webhook transport
//! stay with the dialogue manager; this crate only sees a [`Request`] and
//! returns a [`Response`].
//!
//! ```no_run
//! use it_support_actions::{ActionsConfig, Backends, HandlerRegistry, HandlerSettings, Request};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ActionsConfig::load()?;
//! let backends = Backends::from_config(&config)?;
//! let registry = HandlerRegistry::standard(&backends, HandlerSettings::from(&config));
//!
//! let request = Request::new("conversation-1").with_slot("device", "printer");
//! let response = registry.dispatch("action_check_device_status", &request).await?;
//! println!("{}", response.message);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod handlers;
pub mod ports;
pub mod routing;
pub mod value_objects;

// Re-export main types
pub use config::{ActionsConfig, BackendKind, ConfigError, TicketNumbering, ValidationError};
pub use error::ActionError;
pub use events::{ActionEvent, SlotSet};
pub use handlers::{
    intents, ActionHandler, DeviceStatusHandler, HandlerSettings, NetworkStatusHandler,
    SoftwareCompatibilityHandler, SupportTicketHandler, BACKEND_FAILURE_MESSAGE,
};
pub use ports::{
    BackendError, Backends, Clock, CompatibilityPort, DeviceStatusPort, FixedClock,
    InventoryTable, NetworkStatusPort, SystemClock, TicketPort,
};
pub use routing::{HandlerRegistry, RegistryBuilder};
pub use value_objects::{
    slots, Compatibility, Request, Response, ServiceStatus, SlotUpdate, Ticket, TicketNumber,
};
