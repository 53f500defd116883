//! Backend ports consulted by the action handlers
//!
//! Each handler talks to exactly one system-of-record through a port trait.
//! The default implementations in [`mock`] return canned results; the
//! [`table`] backend reads records from a JSON inventory selected by
//! configuration. Ports always return a `Result` so a real integration can
//! fail without changing the handler contract.

pub mod mock;
pub mod table;

use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::config::{ActionsConfig, BackendKind, ConfigError};
use crate::value_objects::{Compatibility, ServiceStatus, Ticket, TicketNumber};

pub use mock::{
    MockCompatibilityPort, MockDeviceStatusPort, MockNetworkStatusPort, MockTicketPort,
};
pub use table::InventoryTable;

/// Failure of a backend lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("{service} backend unavailable: {reason}")]
    Unavailable {
        service: &'static str,
        reason: String,
    },

    #[error("{service} lookup timed out after {timeout:?}")]
    Timeout {
        service: &'static str,
        timeout: Duration,
    },

    #[error("{service} returned a record without a valid '{field}' field")]
    Malformed {
        service: &'static str,
        field: String,
    },
}

/// Device monitoring system
#[async_trait]
pub trait DeviceStatusPort: Send + Sync {
    async fn device_status(&self, device: &str) -> Result<ServiceStatus, BackendError>;
}

/// Ticketing system; takes ownership of the ticket
#[async_trait]
pub trait TicketPort: Send + Sync {
    async fn create_ticket(&self, ticket: Ticket) -> Result<TicketNumber, BackendError>;
}

/// Software compatibility database
#[async_trait]
pub trait CompatibilityPort: Send + Sync {
    async fn check_compatibility(&self, software: &str) -> Result<Compatibility, BackendError>;
}

/// Network monitoring system
#[async_trait]
pub trait NetworkStatusPort: Send + Sync {
    async fn network_status(&self) -> Result<ServiceStatus, BackendError>;
}

/// Source of the current wall-clock time
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stopped at a fixed instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Run a lookup, turning an elapsed deadline into [`BackendError::Timeout`]
pub async fn with_timeout<T, F>(
    service: &'static str,
    timeout: Duration,
    lookup: F,
) -> Result<T, BackendError>
where
    F: Future<Output = Result<T, BackendError>>,
{
    match tokio::time::timeout(timeout, lookup).await {
        Ok(result) => result,
        Err(_) => Err(BackendError::Timeout { service, timeout }),
    }
}

/// The set of ports a registry is wired against
#[derive(Clone)]
pub struct Backends {
    pub device_status: Arc<dyn DeviceStatusPort>,
    pub tickets: Arc<dyn TicketPort>,
    pub compatibility: Arc<dyn CompatibilityPort>,
    pub network_status: Arc<dyn NetworkStatusPort>,
    pub clock: Arc<dyn Clock>,
}

impl Backends {
    /// Canned backends with default ticket numbering and the system clock
    pub fn mock() -> Self {
        Self {
            device_status: Arc::new(MockDeviceStatusPort::new()),
            tickets: Arc::new(MockTicketPort::default()),
            compatibility: Arc::new(MockCompatibilityPort::new()),
            network_status: Arc::new(MockNetworkStatusPort::new()),
            clock: Arc::new(SystemClock),
        }
    }

    /// Build the backends selected by configuration
    pub fn from_config(config: &ActionsConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let tickets = Arc::new(MockTicketPort::new(
            config.tickets.prefix.clone(),
            config.tickets.numbering,
        ));

        let backends = match config.backend.kind {
            BackendKind::Mock => Self {
                tickets,
                ..Self::mock()
            },
            BackendKind::Table => {
                // validate() guarantees the path is present for the table backend
                let path = config
                    .backend
                    .inventory_path
                    .as_deref()
                    .ok_or(crate::config::ValidationError::MissingRequired(
                        "backend.inventory_path",
                    ))?;
                let table = Arc::new(InventoryTable::load(path)?);
                Self {
                    device_status: table.clone(),
                    tickets,
                    compatibility: table.clone(),
                    network_status: table,
                    clock: Arc::new(SystemClock),
                }
            }
        };

        tracing::info!(
            backend = ?config.backend.kind,
            numbering = ?config.tickets.numbering,
            "Backends initialised"
        );

        Ok(backends)
    }

    /// Replace the clock, typically with a [`FixedClock`]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }
}
