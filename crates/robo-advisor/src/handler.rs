//! Intent Handling
//!
//! One call per conversational turn. All state lives in the request the
//! platform sends; nothing is kept between calls.

use serde_json::Value;

use crate::dialog::{close, delegate, elicit_slot};
use crate::error::Result;
use crate::model::{
    DialogResponse, FulfillmentState, IntentRequest, InvocationSource, Message,
    RECOMMEND_PORTFOLIO_INTENT,
};
use crate::recommendation::recommend;
use crate::validation::ValidationPolicy;

/// Fulfills the `RecommendPortfolio` intent
#[derive(Clone, Debug, Default)]
pub struct PortfolioAdvisor {
    policy: ValidationPolicy,
}

impl PortfolioAdvisor {
    pub const fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    /// Route a request to the handler for its intent
    pub fn dispatch(&self, request: &IntentRequest) -> Result<DialogResponse> {
        let intent_name = request.intent_name();
        tracing::debug!(
            intent = intent_name,
            source = %request.invocation_source,
            user_id = request.user_id.as_deref(),
            "Dispatching intent"
        );

        if intent_name == RECOMMEND_PORTFOLIO_INTENT {
            return self.recommend_portfolio(request);
        }

        tracing::error!(intent = intent_name, "Intent not supported by this handler");
        Err(crate::HandlerError::UnsupportedIntent(intent_name.to_string()))
    }

    /// Dialog management and fulfillment for recommending a portfolio
    pub fn recommend_portfolio(&self, request: &IntentRequest) -> Result<DialogResponse> {
        let slots = request.slots()?;
        let session_attributes = request.session_attributes.clone();

        // Fulfillment re-validates: slots can arrive without a prior dialog hook.
        let validation = self.policy.validate(
            slots.age.as_deref(),
            slots.investment_amount.as_deref(),
        );

        if let Some((violated_slot, message)) = validation.violation() {
            tracing::info!(
                slot = %violated_slot,
                source = %request.invocation_source,
                "Slot failed validation, eliciting again"
            );
            let mut slots = slots;
            slots.clear(violated_slot);
            return Ok(elicit_slot(
                session_attributes,
                request.intent_name(),
                slots,
                violated_slot,
                message.clone(),
            ));
        }

        let response = match request.invocation_source {
            InvocationSource::DialogCodeHook => delegate(session_attributes, slots),
            InvocationSource::FulfillmentCodeHook => {
                let risk_level = slots.risk_level.as_deref().unwrap_or_default();
                let recommendation = recommend(risk_level);
                tracing::info!(risk_level, recommendation, "Portfolio recommended");

                close(
                    session_attributes,
                    FulfillmentState::Fulfilled,
                    Message::plain_text(recommendation_message(
                        slots.first_name.as_deref(),
                        recommendation,
                    )),
                )
            }
        };

        Ok(response)
    }
}

fn recommendation_message(first_name: Option<&str>, recommendation: &str) -> String {
    let body = format!(
        "based on the risk level you defined, my recommendation is to choose \
         an investment portfolio with {recommendation}"
    );

    match first_name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => format!("{name} thank you for your information; {body}"),
        None => format!("Thank you for your information; {body}"),
    }
}

/// Dispatch with the default validation policy
pub fn dispatch(request: &IntentRequest) -> Result<DialogResponse> {
    PortfolioAdvisor::default().dispatch(request)
}

/// Raw entry point: platform event in, platform response out.
///
/// The context is whatever the host passes along; it is not consulted.
pub fn handle<C: ?Sized>(event: Value, _context: &C) -> Result<Value> {
    let request: IntentRequest = serde_json::from_value(event)?;
    let response = dispatch(&request)?;
    Ok(serde_json::to_value(response)?)
}
