//! Support ticket action

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use super::{backend_failure, intents, ActionHandler, HandlerSettings};
use crate::ports::{with_timeout, Clock, TicketPort};
use crate::value_objects::{slots, Request, Response, Ticket};

/// Raises a ticket from whatever the conversation has collected so far.
/// None of the slots are required.
pub struct SupportTicketHandler {
    port: Arc<dyn TicketPort>,
    clock: Arc<dyn Clock>,
    settings: HandlerSettings,
}

impl SupportTicketHandler {
    pub fn new(port: Arc<dyn TicketPort>, clock: Arc<dyn Clock>, settings: HandlerSettings) -> Self {
        Self {
            port,
            clock,
            settings,
        }
    }

    fn ticket_for(&self, request: &Request) -> Ticket {
        // Raw slot values: the ticketing side decides what an empty field means
        let slot = |name: &str| request.slots.get(name).cloned().flatten();
        Ticket {
            timestamp: self.clock.now(),
            issue_type: slot(slots::ISSUE_TYPE),
            device: slot(slots::DEVICE),
            software: slot(slots::SOFTWARE),
            conversation_id: request.conversation_id.clone(),
        }
    }
}

#[async_trait]
impl ActionHandler for SupportTicketHandler {
    fn name(&self) -> &'static str {
        intents::CREATE_SUPPORT_TICKET
    }

    async fn run(&self, request: &Request) -> Response {
        let ticket = self.ticket_for(request);

        let lookup = self.port.create_ticket(ticket);
        let number = match with_timeout("ticketing", self.settings.lookup_timeout, lookup).await {
            Ok(number) => number,
            Err(err) => return backend_failure(self.name(), request, err.into()),
        };

        info!(
            ticket_number = %number,
            conversation_id = %request.conversation_id,
            "Support ticket created"
        );

        Response::text(format!(
            "I've created support ticket #{number} for your issue. An IT support specialist will review it shortly."
        ))
    }
}
