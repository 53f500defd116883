//! In-memory backends returning canned results

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::{BackendError, CompatibilityPort, DeviceStatusPort, NetworkStatusPort, TicketPort};
use crate::value_objects::{Compatibility, ServiceStatus, Ticket, TicketNumber};

/// Default ticket number prefix
pub const DEFAULT_TICKET_PREFIX: &str = "INC";

/// Device monitoring stand-in
#[derive(Debug, Clone)]
pub struct MockDeviceStatusPort {
    result: Result<ServiceStatus, BackendError>,
}

impl MockDeviceStatusPort {
    pub fn new() -> Self {
        Self::with_result(Ok(ServiceStatus::operational(
            "All systems functioning normally.",
        )))
    }

    pub fn with_result(result: Result<ServiceStatus, BackendError>) -> Self {
        Self { result }
    }
}

impl Default for MockDeviceStatusPort {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeviceStatusPort for MockDeviceStatusPort {
    async fn device_status(&self, device: &str) -> Result<ServiceStatus, BackendError> {
        debug!(device, "Mock device status lookup");
        self.result.clone()
    }
}

/// Compatibility database stand-in
#[derive(Debug, Clone)]
pub struct MockCompatibilityPort {
    result: Result<Compatibility, BackendError>,
}

impl MockCompatibilityPort {
    pub fn new() -> Self {
        Self::with_result(Ok(Compatibility::compatible(
            "System meets all requirements.",
        )))
    }

    pub fn with_result(result: Result<Compatibility, BackendError>) -> Self {
        Self { result }
    }
}

impl Default for MockCompatibilityPort {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompatibilityPort for MockCompatibilityPort {
    async fn check_compatibility(&self, software: &str) -> Result<Compatibility, BackendError> {
        debug!(software, "Mock compatibility lookup");
        self.result.clone()
    }
}

/// Network monitoring stand-in
#[derive(Debug, Clone)]
pub struct MockNetworkStatusPort {
    result: Result<ServiceStatus, BackendError>,
}

impl MockNetworkStatusPort {
    pub fn new() -> Self {
        Self::with_result(Ok(ServiceStatus::operational(
            "All networks functioning normally.",
        )))
    }

    pub fn with_result(result: Result<ServiceStatus, BackendError>) -> Self {
        Self { result }
    }
}

impl Default for MockNetworkStatusPort {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NetworkStatusPort for MockNetworkStatusPort {
    async fn network_status(&self) -> Result<ServiceStatus, BackendError> {
        self.result.clone()
    }
}

/// How the mock ticketing backend numbers tickets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketNumbering {
    /// Prefix followed by the ticket timestamp as `YYYYMMDDHHmm`.
    /// Two tickets raised in the same minute share a number.
    #[default]
    Minute,
    /// Prefix followed by a random UUID
    Unique,
}

/// Ticketing system stand-in
#[derive(Debug, Clone)]
pub struct MockTicketPort {
    prefix: String,
    numbering: TicketNumbering,
    failure: Option<BackendError>,
}

impl MockTicketPort {
    pub fn new(prefix: impl Into<String>, numbering: TicketNumbering) -> Self {
        Self {
            prefix: prefix.into(),
            numbering,
            failure: None,
        }
    }

    /// A ticketing backend that rejects every ticket
    pub fn failing(err: BackendError) -> Self {
        Self {
            failure: Some(err),
            ..Self::default()
        }
    }

    fn number_for(&self, ticket: &Ticket) -> TicketNumber {
        match self.numbering {
            TicketNumbering::Minute => {
                TicketNumber(format!("{}{}", self.prefix, ticket.timestamp.format("%Y%m%d%H%M")))
            }
            TicketNumbering::Unique => {
                TicketNumber(format!("{}-{}", self.prefix, Uuid::new_v4().simple()))
            }
        }
    }
}

impl Default for MockTicketPort {
    fn default() -> Self {
        Self::new(DEFAULT_TICKET_PREFIX, TicketNumbering::default())
    }
}

#[async_trait]
impl TicketPort for MockTicketPort {
    async fn create_ticket(&self, ticket: Ticket) -> Result<TicketNumber, BackendError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        let number = self.number_for(&ticket);
        debug!(
            ticket_number = %number,
            ticket = %serde_json::to_string(&ticket).unwrap_or_default(),
            "Mock ticket created"
        );
        Ok(number)
    }
}
