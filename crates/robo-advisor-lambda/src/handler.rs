//! Function Handler

use lambda_runtime::{Error, LambdaEvent};
use robo_advisor::{DialogResponse, IntentRequest, PortfolioAdvisor};

/// One platform invocation. Unsupported intents come back as errors so the
/// runtime reports a failed invocation instead of a dialog reply.
pub async fn function_handler(
    advisor: &PortfolioAdvisor,
    event: LambdaEvent<IntentRequest>,
) -> Result<DialogResponse, Error> {
    let (request, context) = event.into_parts();
    tracing::debug!(request_id = %context.request_id, "Invocation received");

    let response = advisor.dispatch(&request)?;
    tracing::debug!(
        request_id = %context.request_id,
        action = response.dialog_action.kind(),
        "Invocation answered"
    );

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_runtime::Context;
    use serde_json::json;

    fn event(payload: serde_json::Value) -> LambdaEvent<IntentRequest> {
        LambdaEvent::new(serde_json::from_value(payload).unwrap(), Context::default())
    }

    #[tokio::test]
    async fn test_fulfillment_invocation() {
        let advisor = PortfolioAdvisor::default();
        let response = function_handler(
            &advisor,
            event(json!({
                "invocationSource": "FulfillmentCodeHook",
                "sessionAttributes": {"returning": "true"},
                "currentIntent": {
                    "name": "RecommendPortfolio",
                    "slots": {
                        "firstName": "Ana",
                        "age": "30",
                        "investmentAmount": "10000",
                        "riskLevel": "High"
                    }
                }
            })),
        )
        .await
        .unwrap();

        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value["sessionAttributes"], json!({"returning": "true"}));
        assert_eq!(value["dialogAction"]["type"], "Close");
        let content = value["dialogAction"]["message"]["content"].as_str().unwrap();
        assert!(content.contains("Ana"));
        assert!(content.contains("20% bonds (AGG), 80% equities (SPY)"));
    }

    #[tokio::test]
    async fn test_unsupported_intent_fails_invocation() {
        let advisor = PortfolioAdvisor::default();
        let result = function_handler(
            &advisor,
            event(json!({
                "invocationSource": "DialogCodeHook",
                "currentIntent": {
                    "name": "OrderFlowers",
                    "slots": {"flowerType": "roses", "pickupDate": "2026-02-14"}
                }
            })),
        )
        .await;

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Intent with name OrderFlowers not supported");
    }
}
