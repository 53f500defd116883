//! Value objects exchanged between the dialogue manager, the handlers and the
//! backend ports

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::ActionError;
use crate::events::{ActionEvent, SlotSet};

/// Slot names read or written by the handlers
pub mod slots {
    pub const DEVICE: &str = "device";
    pub const ISSUE_TYPE: &str = "issue_type";
    pub const SOFTWARE: &str = "software";
}

/// Status value a backend reports for a healthy device or network
pub const OPERATIONAL: &str = "operational";

/// Snapshot of the conversation handed to a handler for a single invocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Opaque conversation identifier, used for correlation only
    pub conversation_id: String,
    /// Current slot values; `None` means the slot is unset
    #[serde(default)]
    pub slots: HashMap<String, Option<String>>,
}

impl Request {
    /// Create a request with no slots filled
    pub fn new(conversation_id: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            slots: HashMap::new(),
        }
    }

    /// Set a slot value
    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(name.into(), Some(value.into()));
        self
    }

    /// Record a slot as explicitly unset
    pub fn with_unset_slot(mut self, name: impl Into<String>) -> Self {
        self.slots.insert(name.into(), None);
        self
    }

    /// Current value of a slot. Missing, unset and empty slots all read as `None`.
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.slots
            .get(name)
            .and_then(|value| value.as_deref())
            .filter(|value| !value.is_empty())
    }

    /// Value of a slot the caller cannot proceed without
    pub fn require_slot(&self, name: &str) -> Result<&str, ActionError> {
        self.slot(name)
            .ok_or_else(|| ActionError::MissingRequiredSlot(name.to_string()))
    }
}

/// A single slot assignment to be applied by the dialogue manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotUpdate {
    pub name: String,
    pub value: String,
}

impl SlotUpdate {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Handler output: one message and an ordered list of slot updates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Text to surface to the end user
    pub message: String,
    /// Updates to apply, in order; empty means no state change
    #[serde(default)]
    pub slot_updates: Vec<SlotUpdate>,
}

impl Response {
    /// A response carrying only a message
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            slot_updates: Vec::new(),
        }
    }

    /// Append a slot update
    pub fn with_slot_update(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.slot_updates.push(SlotUpdate::new(name, value));
        self
    }

    /// Tracker events the dialogue manager applies for this response
    pub fn events(&self) -> Vec<ActionEvent> {
        self.slot_updates
            .iter()
            .map(|update| ActionEvent::SlotSet(SlotSet::from(update)))
            .collect()
    }
}

/// Health record returned by the device and network status lookups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// `"operational"`, `"degraded"`, `"down"`, ...
    pub status: String,
    /// Human-readable explanation, quoted verbatim on the issue branch
    pub detail: String,
}

impl ServiceStatus {
    pub fn new(status: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            detail: detail.into(),
        }
    }

    pub fn operational(detail: impl Into<String>) -> Self {
        Self::new(OPERATIONAL, detail)
    }

    pub fn is_operational(&self) -> bool {
        self.status == OPERATIONAL
    }
}

/// Result of a software compatibility check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compatibility {
    pub compatible: bool,
    pub detail: String,
}

impl Compatibility {
    pub fn compatible(detail: impl Into<String>) -> Self {
        Self {
            compatible: true,
            detail: detail.into(),
        }
    }

    pub fn incompatible(detail: impl Into<String>) -> Self {
        Self {
            compatible: false,
            detail: detail.into(),
        }
    }
}

/// Support ticket handed to the ticketing backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// When the ticket was raised (local wall time)
    pub timestamp: NaiveDateTime,
    pub issue_type: Option<String>,
    pub device: Option<String>,
    pub software: Option<String>,
    /// Conversation the ticket originated from
    pub conversation_id: String,
}

/// Identifier assigned to a ticket by the ticketing backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketNumber(pub String);

impl TicketNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
