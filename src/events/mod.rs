//! Tracker events returned to the dialogue manager

use serde::{Deserialize, Serialize};

use crate::value_objects::SlotUpdate;

/// Slot assignment event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSet {
    pub name: String,
    pub value: String,
}

impl From<&SlotUpdate> for SlotSet {
    fn from(update: &SlotUpdate) -> Self {
        Self {
            name: update.name.clone(),
            value: update.value.clone(),
        }
    }
}

/// Events a handler asks the tracker to apply, tagged the way the tracker
/// expects them on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum ActionEvent {
    #[serde(rename = "slot")]
    SlotSet(SlotSet),
}
