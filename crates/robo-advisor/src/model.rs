//! Domain Models
//!
//! Request and response shapes exchanged with the dialog platform. Field
//! names are a fixed external contract, hence the explicit serde renames.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the only intent this handler fulfills
pub const RECOMMEND_PORTFOLIO_INTENT: &str = "RecommendPortfolio";

/// Opaque session state owned by the platform. `None` round-trips as `null`.
pub type SessionAttributes = Option<Map<String, Value>>;

/// Stage of the conversation the platform is calling us from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvocationSource {
    /// Mid-dialog: validate and hand control back
    DialogCodeHook,
    /// All slots collected: validate and answer
    FulfillmentCodeHook,
}

impl std::fmt::Display for InvocationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DialogCodeHook => write!(f, "DialogCodeHook"),
            Self::FulfillmentCodeHook => write!(f, "FulfillmentCodeHook"),
        }
    }
}

/// The slots of the `RecommendPortfolio` intent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlotName {
    FirstName,
    Age,
    InvestmentAmount,
    RiskLevel,
}

impl SlotName {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::Age => "age",
            Self::InvestmentAmount => "investmentAmount",
            Self::RiskLevel => "riskLevel",
        }
    }
}

impl std::fmt::Display for SlotName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Slot values collected so far.
///
/// The set is closed: an unknown slot key means the bot and this handler
/// disagree about the intent definition, and conversion fails.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Slots {
    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub age: Option<String>,

    #[serde(default)]
    pub investment_amount: Option<String>,

    #[serde(default)]
    pub risk_level: Option<String>,
}

impl Slots {
    pub fn get(&self, slot: SlotName) -> Option<&str> {
        match slot {
            SlotName::FirstName => self.first_name.as_deref(),
            SlotName::Age => self.age.as_deref(),
            SlotName::InvestmentAmount => self.investment_amount.as_deref(),
            SlotName::RiskLevel => self.risk_level.as_deref(),
        }
    }

    /// Forget a slot value so the platform asks for it again
    pub fn clear(&mut self, slot: SlotName) {
        match slot {
            SlotName::FirstName => self.first_name = None,
            SlotName::Age => self.age = None,
            SlotName::InvestmentAmount => self.investment_amount = None,
            SlotName::RiskLevel => self.risk_level = None,
        }
    }

    /// Read the slots of an intent already known to be ours. `null` means
    /// nothing collected yet.
    pub fn from_value(value: &Value) -> serde_json::Result<Self> {
        Ok(Option::<Self>::deserialize(value)?.unwrap_or_default())
    }

    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "firstName": self.first_name,
            "age": self.age,
            "investmentAmount": self.investment_amount,
            "riskLevel": self.risk_level,
        })
    }

    pub fn with(mut self, slot: SlotName, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match slot {
            SlotName::FirstName => self.first_name = value,
            SlotName::Age => self.age = value,
            SlotName::InvestmentAmount => self.investment_amount = value,
            SlotName::RiskLevel => self.risk_level = value,
        }
        self
    }
}

/// The intent the platform recognized for this turn.
///
/// Slots stay raw until the intent name has been routed: another intent's
/// slots must surface as an unsupported intent, not a malformed event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentIntent {
    pub name: String,

    #[serde(default)]
    pub slots: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<String>,
}

/// Bot metadata sent along with every event
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// One conversational turn as delivered by the platform
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    pub current_intent: CurrentIntent,

    pub invocation_source: InvocationSource,

    #[serde(default)]
    pub session_attributes: SessionAttributes,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_transcript: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dialog_mode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<BotInfo>,
}

impl IntentRequest {
    pub fn new(intent_name: impl Into<String>, source: InvocationSource, slots: Slots) -> Self {
        Self {
            current_intent: CurrentIntent {
                name: intent_name.into(),
                slots: slots.to_value(),
                confirmation_status: None,
            },
            invocation_source: source,
            session_attributes: None,
            message_version: None,
            user_id: None,
            input_transcript: None,
            output_dialog_mode: None,
            bot: None,
        }
    }

    pub fn with_session_attributes(mut self, attributes: Map<String, Value>) -> Self {
        self.session_attributes = Some(attributes);
        self
    }

    pub fn intent_name(&self) -> &str {
        &self.current_intent.name
    }

    pub fn slots(&self) -> serde_json::Result<Slots> {
        Slots::from_value(&self.current_intent.slots)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    PlainText,
}

/// Text shown to the user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: ContentType,
    pub content: String,
}

impl Message {
    pub fn plain_text(content: impl Into<String>) -> Self {
        Self {
            content_type: ContentType::PlainText,
            content: content.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FulfillmentState {
    Fulfilled,
}

/// What the platform should do next
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum DialogAction {
    /// Re-prompt for one slot
    ElicitSlot {
        intent_name: String,
        slots: Slots,
        slot_to_elicit: SlotName,
        message: Message,
    },
    /// Let the platform pick the next step
    Delegate { slots: Slots },
    /// End the conversation
    Close {
        fulfillment_state: FulfillmentState,
        message: Message,
    },
}

impl DialogAction {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ElicitSlot { .. } => "ElicitSlot",
            Self::Delegate { .. } => "Delegate",
            Self::Close { .. } => "Close",
        }
    }
}

/// The single response of an invocation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogResponse {
    pub session_attributes: SessionAttributes,
    pub dialog_action: DialogAction,
}
