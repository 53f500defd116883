//! Inventory-table backend
//!
//! Serves device, software and network lookups from a JSON document loaded
//! once at startup:
//!
//! ```json
//! {
//!   "devices":  { "printer": { "status": "degraded", "detail": "Toner low." } },
//!   "software": { "Photoshop": { "compatible": false, "detail": "Requires 16GB RAM." } },
//!   "network":  { "status": "operational", "detail": "All links up." }
//! }
//! ```
//!
//! Records are validated when looked up, so a bad entry only affects the
//! conversations that reach it. `detail` may be left out of operational and
//! compatible records; anything else without one is malformed.
//!
//! The table has no notion of "unknown": a name it holds no record for is
//! reported as [`BackendError::Unavailable`], the same as an unreachable
//! monitoring system, and the user gets the generic apology.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use super::{BackendError, CompatibilityPort, DeviceStatusPort, NetworkStatusPort};
use crate::value_objects::{Compatibility, ServiceStatus, OPERATIONAL};

const DEVICE_SERVICE: &str = "device status";
const SOFTWARE_SERVICE: &str = "compatibility";
const NETWORK_SERVICE: &str = "network status";

/// Errors loading the inventory document
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Failed to read inventory {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Inventory {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Inventory {0} must be a JSON object")]
    NotAnObject(PathBuf),
}

/// Lookup tables keyed by lowercase name. A name without a record is
/// reported as unavailable rather than as an unknown device or package.
#[derive(Debug, Clone, Default)]
pub struct InventoryTable {
    devices: Map<String, Value>,
    software: Map<String, Value>,
    network: Option<Value>,
}

impl InventoryTable {
    /// Load the inventory from a JSON file
    pub fn load(path: &Path) -> Result<Self, InventoryError> {
        let raw = std::fs::read_to_string(path).map_err(|source| InventoryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let document: Value = serde_json::from_str(&raw).map_err(|source| InventoryError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::from_value(document)
            .ok_or_else(|| InventoryError::NotAnObject(path.to_path_buf()))?;

        info!(
            path = %path.display(),
            devices = table.devices.len(),
            software = table.software.len(),
            network = table.network.is_some(),
            "Inventory loaded"
        );

        Ok(table)
    }

    /// Build from an already parsed document; `None` unless it is an object
    pub fn from_value(document: Value) -> Option<Self> {
        let Value::Object(mut root) = document else {
            return None;
        };

        Some(Self {
            devices: lowercase_keys(root.remove("devices")),
            software: lowercase_keys(root.remove("software")),
            network: root.remove("network"),
        })
    }

    fn record<'a>(
        table: &'a Map<String, Value>,
        service: &'static str,
        name: &str,
    ) -> Result<&'a Value, BackendError> {
        table
            .get(&name.to_lowercase())
            .ok_or_else(|| BackendError::Unavailable {
                service,
                reason: format!("no record for '{name}'"),
            })
    }
}

fn lowercase_keys(section: Option<Value>) -> Map<String, Value> {
    match section {
        Some(Value::Object(entries)) => entries
            .into_iter()
            .map(|(name, record)| (name.to_lowercase(), record))
            .collect(),
        _ => Map::new(),
    }
}

fn string_field(record: &Value, service: &'static str, field: &str) -> Result<String, BackendError> {
    record
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| BackendError::Malformed {
            service,
            field: field.to_string(),
        })
}

/// `detail` is quoted to the user on issue branches, so it is only optional
/// for healthy records
fn detail_field(
    record: &Value,
    service: &'static str,
    healthy: bool,
) -> Result<String, BackendError> {
    match record.get("detail") {
        None | Some(Value::Null) if healthy => Ok(String::new()),
        _ => string_field(record, service, "detail"),
    }
}

fn service_status(record: &Value, service: &'static str) -> Result<ServiceStatus, BackendError> {
    let status = string_field(record, service, "status")?;
    let healthy = status == OPERATIONAL;
    Ok(ServiceStatus {
        detail: detail_field(record, service, healthy)?,
        status,
    })
}

#[async_trait]
impl DeviceStatusPort for InventoryTable {
    async fn device_status(&self, device: &str) -> Result<ServiceStatus, BackendError> {
        debug!(device, "Inventory device lookup");
        let record = Self::record(&self.devices, DEVICE_SERVICE, device)?;
        service_status(record, DEVICE_SERVICE)
    }
}

#[async_trait]
impl CompatibilityPort for InventoryTable {
    async fn check_compatibility(&self, software: &str) -> Result<Compatibility, BackendError> {
        debug!(software, "Inventory compatibility lookup");
        let record = Self::record(&self.software, SOFTWARE_SERVICE, software)?;
        let compatible = record
            .get("compatible")
            .and_then(Value::as_bool)
            .ok_or_else(|| BackendError::Malformed {
                service: SOFTWARE_SERVICE,
                field: "compatible".to_string(),
            })?;

        Ok(Compatibility {
            compatible,
            detail: detail_field(record, SOFTWARE_SERVICE, compatible)?,
        })
    }
}

#[async_trait]
impl NetworkStatusPort for InventoryTable {
    async fn network_status(&self) -> Result<ServiceStatus, BackendError> {
        let record = self.network.as_ref().ok_or_else(|| BackendError::Unavailable {
            service: NETWORK_SERVICE,
            reason: "inventory has no network record".to_string(),
        })?;
        service_status(record, NETWORK_SERVICE)
    }
}
