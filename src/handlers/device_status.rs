//! Device status action

use async_trait::async_trait;
use std::sync::Arc;

use super::{backend_failure, intents, ActionHandler, HandlerSettings};
use crate::ports::{with_timeout, DeviceStatusPort};
use crate::value_objects::{slots, Request, Response};

pub const ASK_FOR_DEVICE: &str = "Could you specify which device you're having issues with?";

/// Reports on the health of the device named in the `device` slot
pub struct DeviceStatusHandler {
    port: Arc<dyn DeviceStatusPort>,
    settings: HandlerSettings,
}

impl DeviceStatusHandler {
    pub fn new(port: Arc<dyn DeviceStatusPort>, settings: HandlerSettings) -> Self {
        Self { port, settings }
    }
}

#[async_trait]
impl ActionHandler for DeviceStatusHandler {
    fn name(&self) -> &'static str {
        intents::CHECK_DEVICE_STATUS
    }

    async fn run(&self, request: &Request) -> Response {
        let Ok(device) = request.require_slot(slots::DEVICE) else {
            return Response::text(ASK_FOR_DEVICE);
        };

        let lookup = self.port.device_status(device);
        let status = match with_timeout("device status", self.settings.lookup_timeout, lookup).await {
            Ok(status) => status,
            Err(err) => return backend_failure(self.name(), request, err.into()),
        };

        let message = if status.is_operational() {
            format!(
                "The {device} appears to be working normally. Are you experiencing specific issues with it?"
            )
        } else {
            format!("I've detected an issue with the {device}. {}", status.detail)
        };

        // Echo the slot so the tracker keeps it for follow-up turns
        Response::text(message).with_slot_update(slots::DEVICE, device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockDeviceStatusPort;
    use crate::value_objects::ServiceStatus;

    fn handler(status: ServiceStatus) -> DeviceStatusHandler {
        DeviceStatusHandler::new(
            Arc::new(MockDeviceStatusPort::with_result(Ok(status))),
            HandlerSettings::default(),
        )
    }

    #[tokio::test]
    async fn test_degraded_device_quotes_detail() {
        let request = Request::new("c1").with_slot(slots::DEVICE, "monitor");

        let response = handler(ServiceStatus::new("degraded", "Flickering reported on port 2."))
            .run(&request)
            .await;

        assert_eq!(
            response.message,
            "I've detected an issue with the monitor. Flickering reported on port 2."
        );
        assert_eq!(response.slot_updates.len(), 1);
        assert_eq!(response.slot_updates[0].value, "monitor");
    }
}
