//! Property tests for the handler branches

use chrono::NaiveDate;
use it_support_actions::{
    intents,
    ports::{MockCompatibilityPort, MockDeviceStatusPort, MockNetworkStatusPort},
    slots, Backends, Compatibility, FixedClock, HandlerRegistry, HandlerSettings, Request,
    ServiceStatus, SlotUpdate,
};
use proptest::prelude::*;
use std::sync::Arc;

fn registry_with(
    device: ServiceStatus,
    compatibility: Compatibility,
    network: ServiceStatus,
) -> HandlerRegistry {
    let clock = FixedClock(
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap(),
    );
    let backends = Backends {
        device_status: Arc::new(MockDeviceStatusPort::with_result(Ok(device))),
        compatibility: Arc::new(MockCompatibilityPort::with_result(Ok(compatibility))),
        network_status: Arc::new(MockNetworkStatusPort::with_result(Ok(network))),
        ..Backends::mock().with_clock(clock)
    };
    HandlerRegistry::standard(&backends, HandlerSettings::default())
}

fn default_registry() -> HandlerRegistry {
    registry_with(
        ServiceStatus::operational("fine"),
        Compatibility::compatible("fine"),
        ServiceStatus::operational("fine"),
    )
}

fn other_slots() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-z_]{1,12}", "[A-Za-z0-9 ]{0,16}"), 0..4)
}

fn request_with(conversation_id: &str, extra: Vec<(String, String)>, skip: &str) -> Request {
    extra
        .into_iter()
        .filter(|(name, _)| name != skip)
        .fold(Request::new(conversation_id), |request, (name, value)| {
            request.with_slot(name, value)
        })
}

fn non_operational_status() -> impl Strategy<Value = String> {
    "[a-z]{1,12}".prop_filter("must not be operational", |s| s != "operational")
}

proptest! {
    #[test]
    fn missing_device_always_asks(extra in other_slots()) {
        let registry = default_registry();
        let request = request_with("c", extra, slots::DEVICE);

        let response = tokio_test::block_on(
            registry.dispatch(intents::CHECK_DEVICE_STATUS, &request),
        ).unwrap();

        prop_assert_eq!(
            response.message,
            "Could you specify which device you're having issues with?"
        );
        prop_assert!(response.slot_updates.is_empty());
    }

    #[test]
    fn missing_software_always_asks(extra in other_slots()) {
        let registry = default_registry();
        let request = request_with("c", extra, slots::SOFTWARE);

        let response = tokio_test::block_on(
            registry.dispatch(intents::CHECK_SOFTWARE_COMPATIBILITY, &request),
        ).unwrap();

        prop_assert_eq!(response.message, "Which software are you trying to install?");
        prop_assert!(response.slot_updates.is_empty());
    }

    #[test]
    fn device_operational_branch_ignores_detail(
        device in "[a-z]{1,10}",
        detail in "[A-Za-z0-9 .]{0,40}",
    ) {
        let registry = registry_with(
            ServiceStatus::operational(detail),
            Compatibility::compatible("fine"),
            ServiceStatus::operational("fine"),
        );
        let request = Request::new("c").with_slot(slots::DEVICE, device.clone());

        let response = tokio_test::block_on(
            registry.dispatch(intents::CHECK_DEVICE_STATUS, &request),
        ).unwrap();

        prop_assert_eq!(
            response.message,
            format!("The {device} appears to be working normally. Are you experiencing specific issues with it?")
        );
        prop_assert_eq!(response.slot_updates, vec![SlotUpdate::new(slots::DEVICE, device)]);
    }

    #[test]
    fn device_issue_branch_quotes_detail(
        device in "[a-z]{1,10}",
        status in non_operational_status(),
        detail in "[A-Za-z0-9 .]{0,40}",
    ) {
        let registry = registry_with(
            ServiceStatus::new(status, detail.clone()),
            Compatibility::compatible("fine"),
            ServiceStatus::operational("fine"),
        );
        let request = Request::new("c").with_slot(slots::DEVICE, device.clone());

        let response = tokio_test::block_on(
            registry.dispatch(intents::CHECK_DEVICE_STATUS, &request),
        ).unwrap();

        prop_assert_eq!(
            response.message,
            format!("I've detected an issue with the {device}. {detail}")
        );
        prop_assert_eq!(response.slot_updates, vec![SlotUpdate::new(slots::DEVICE, device)]);
    }

    #[test]
    fn network_branch_follows_status(
        status in prop_oneof![Just("operational".to_string()), non_operational_status()],
        detail in "[A-Za-z0-9 .]{0,40}",
    ) {
        let operational = status == "operational";
        let registry = registry_with(
            ServiceStatus::operational("fine"),
            Compatibility::compatible("fine"),
            ServiceStatus::new(status, detail.clone()),
        );

        let response = tokio_test::block_on(
            registry.dispatch(intents::CHECK_NETWORK_STATUS, &Request::new("c")),
        ).unwrap();

        if operational {
            prop_assert!(response.message.starts_with("All network systems are currently operational."));
        } else {
            prop_assert_eq!(
                response.message,
                format!("We're experiencing some network issues: {detail}")
            );
        }
        prop_assert!(response.slot_updates.is_empty());
    }

    #[test]
    fn compatibility_slot_update_only_when_compatible(
        software in "[A-Za-z]{1,12}",
        compatible in any::<bool>(),
        detail in "[A-Za-z0-9 .]{0,40}",
    ) {
        let registry = registry_with(
            ServiceStatus::operational("fine"),
            Compatibility { compatible, detail: detail.clone() },
            ServiceStatus::operational("fine"),
        );
        let request = Request::new("c").with_slot(slots::SOFTWARE, software.clone());

        let response = tokio_test::block_on(
            registry.dispatch(intents::CHECK_SOFTWARE_COMPATIBILITY, &request),
        ).unwrap();

        if compatible {
            prop_assert_eq!(
                response.message,
                format!("{software} is compatible with your system. Would you like installation instructions?")
            );
            prop_assert_eq!(response.slot_updates, vec![SlotUpdate::new(slots::SOFTWARE, software)]);
        } else {
            prop_assert_eq!(
                response.message,
                format!("There might be compatibility issues with {software}. {detail}")
            );
            prop_assert!(response.slot_updates.is_empty());
        }
    }

    #[test]
    fn ticket_shape_is_independent_of_slots(
        issue_type in proptest::option::of("[a-z_]{1,12}"),
        device in proptest::option::of("[a-z]{1,10}"),
        software in proptest::option::of("[A-Za-z]{1,10}"),
    ) {
        let registry = default_registry();
        let mut request = Request::new("c");
        for (name, value) in [
            (slots::ISSUE_TYPE, issue_type),
            (slots::DEVICE, device),
            (slots::SOFTWARE, software),
        ] {
            if let Some(value) = value {
                request = request.with_slot(name, value);
            }
        }

        let response = tokio_test::block_on(
            registry.dispatch(intents::CREATE_SUPPORT_TICKET, &request),
        ).unwrap();

        prop_assert_eq!(
            response.message,
            "I've created support ticket #INC202401151030 for your issue. An IT support specialist will review it shortly."
        );
        prop_assert!(response.slot_updates.is_empty());
    }
}
