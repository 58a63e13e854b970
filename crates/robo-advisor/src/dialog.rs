//! Dialog Action Builders

use crate::model::{
    DialogAction, DialogResponse, FulfillmentState, Message, SessionAttributes, SlotName, Slots,
};

/// Ask the user for `slot_to_elicit` again
pub fn elicit_slot(
    session_attributes: SessionAttributes,
    intent_name: impl Into<String>,
    slots: Slots,
    slot_to_elicit: SlotName,
    message: Message,
) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::ElicitSlot {
            intent_name: intent_name.into(),
            slots,
            slot_to_elicit,
            message,
        },
    }
}

/// Hand the next step back to the platform
pub fn delegate(session_attributes: SessionAttributes, slots: Slots) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::Delegate { slots },
    }
}

/// Finish the conversation
pub fn close(
    session_attributes: SessionAttributes,
    fulfillment_state: FulfillmentState,
    message: Message,
) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::Close {
            fulfillment_state,
            message,
        },
    }
}
