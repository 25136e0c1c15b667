//! RecommendPortfolio Intent
//!
//! Two-state dialog. While the platform is still collecting slots
//! (`DialogCodeHook`) each turn is validated: a bad slot is cleared and
//! re-elicited, otherwise the platform is told to carry on. Any other
//! invocation source means every slot is filled and the conversation is
//! closed with the recommendation.

use dialog_core::{
    response::{self, FulfillmentState},
    ConversationRequest, DialogResponse, IntentHandler, Message, Result,
};

use crate::model::{PortfolioSlots, RiskLevel};
use crate::validation::ValidationRules;

/// Intent served by [`RecommendPortfolioHandler`]
pub const INTENT_NAME: &str = "RecommendPortfolio";

/// Dialog handler for portfolio recommendations
#[derive(Clone, Debug, Default)]
pub struct RecommendPortfolioHandler {
    rules: ValidationRules,
}

impl RecommendPortfolioHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_rules(rules: ValidationRules) -> Self {
        Self { rules }
    }

    pub const fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Validation turn: re-elicit the first bad slot or delegate
    fn validate_turn(&self, request: ConversationRequest) -> DialogResponse {
        let slots = PortfolioSlots::from_intent(&request.current_intent);
        let verdict = self.rules.validate(slots.age, slots.investment_amount);

        let ConversationRequest {
            session_attributes,
            current_intent,
            ..
        } = request;

        match (verdict.is_valid, verdict.violated_slot, verdict.message) {
            (false, Some(violated), Some(message)) => {
                tracing::info!(intent = INTENT_NAME, slot = %violated, "Slot failed validation");

                let mut slots = current_intent.slots;
                slots.insert(violated.clone(), None);

                response::elicit_slot(
                    session_attributes,
                    current_intent.name,
                    slots,
                    violated,
                    message,
                )
            }
            _ => {
                tracing::debug!(intent = INTENT_NAME, "Slots valid, delegating");
                response::delegate(session_attributes, current_intent.slots)
            }
        }
    }

    /// Fulfillment turn: close with the recommendation
    fn fulfill(request: ConversationRequest) -> DialogResponse {
        let slots = PortfolioSlots::from_intent(&request.current_intent);
        let level = RiskLevel::from_label(slots.risk_level.unwrap_or_default());

        tracing::info!(intent = INTENT_NAME, risk_level = %level, "Fulfilling recommendation");

        let content = fulfillment_message(slots.first_name, level.recommendation());
        response::close(
            request.session_attributes,
            FulfillmentState::Fulfilled,
            Message::plain_text(content),
        )
    }
}

impl IntentHandler for RecommendPortfolioHandler {
    fn intent_name(&self) -> &str {
        INTENT_NAME
    }

    fn handle(&self, request: ConversationRequest) -> Result<DialogResponse> {
        if request.is_dialog_code_hook() {
            Ok(self.validate_turn(request))
        } else {
            Ok(Self::fulfill(request))
        }
    }
}

fn fulfillment_message(first_name: Option<&str>, recommendation: &str) -> String {
    let body = format!(
        "based on the risk level you defined, my recommendation is to choose \
         an investment portfolio with {recommendation}"
    );
    match first_name {
        Some(name) => format!("{name} thank you for your information; {body}"),
        None => format!("Thank you for your information; {body}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialog_core::{
        CurrentIntent, DialogAction, InvocationSource, SessionAttributes, Slots,
    };
    use serde_json::json;

    fn intent(age: Option<&str>, amount: Option<&str>, risk: Option<&str>) -> CurrentIntent {
        CurrentIntent::new(INTENT_NAME)
            .with_slot("firstName", Some("Ana"))
            .with_slot("age", age)
            .with_slot("investmentAmount", amount)
            .with_slot("riskLevel", risk)
    }

    fn attributes() -> SessionAttributes {
        SessionAttributes::from([("channel".to_string(), "web".to_string())])
    }

    fn dialog_turn(age: Option<&str>, amount: Option<&str>) -> ConversationRequest {
        ConversationRequest::new(InvocationSource::DialogCodeHook, intent(age, amount, None))
            .with_session_attributes(attributes())
    }

    fn fulfillment_turn(source: InvocationSource, risk: Option<&str>) -> ConversationRequest {
        ConversationRequest::new(source, intent(Some("30"), Some("10000"), risk))
            .with_session_attributes(attributes())
    }

    #[test]
    fn test_invalid_age_elicits_age() {
        let handler = RecommendPortfolioHandler::new();
        let response = handler.handle(dialog_turn(Some("18"), Some("6000"))).unwrap();

        assert_eq!(response.session_attributes, Some(attributes()));
        match response.dialog_action {
            DialogAction::ElicitSlot { intent_name, slots, slot_to_elicit, message } => {
                assert_eq!(intent_name, INTENT_NAME);
                assert_eq!(slot_to_elicit, "age");
                assert_eq!(slots.get("age"), Some(&None));
                assert_eq!(slots.get("firstName"), Some(&Some("Ana".to_string())));
                assert_eq!(slots.get("investmentAmount"), Some(&Some("6000".to_string())));
                assert!(message.content.starts_with("You need to be older than 21"));
            }
            other => panic!("expected ElicitSlot, got {}", other.kind()),
        }
    }

    #[test]
    fn test_invalid_amount_elicits_amount_wire_shape() {
        let handler = RecommendPortfolioHandler::new();
        let response = handler.handle(dialog_turn(Some("30"), Some("3000"))).unwrap();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["dialogAction"]["type"], "ElicitSlot");
        assert_eq!(json["dialogAction"]["slotToElicit"], "investmentAmount");
        assert_eq!(json["dialogAction"]["slots"]["investmentAmount"], json!(null));
        assert_eq!(json["dialogAction"]["slots"]["age"], "30");
        assert_eq!(json["sessionAttributes"], json!({"channel": "web"}));
    }

    #[test]
    fn test_violated_slot_added_when_missing_from_mapping() {
        let request = ConversationRequest::new(
            InvocationSource::DialogCodeHook,
            CurrentIntent::new(INTENT_NAME).with_slot("age", Some("90")),
        );
        let response = RecommendPortfolioHandler::new().handle(request).unwrap();
        match response.dialog_action {
            DialogAction::ElicitSlot { slots, .. } => {
                let expected = Slots::from([("age".to_string(), None)]);
                assert_eq!(slots, expected);
            }
            other => panic!("expected ElicitSlot, got {}", other.kind()),
        }
    }

    #[test]
    fn test_valid_slots_delegate_unchanged() {
        let request = dialog_turn(Some("25"), None);
        let original_slots = request.current_intent.slots.clone();

        let response = RecommendPortfolioHandler::new().handle(request).unwrap();

        assert_eq!(response.session_attributes, Some(attributes()));
        assert_eq!(
            response.dialog_action,
            DialogAction::Delegate { slots: original_slots }
        );
    }

    #[test]
    fn test_null_session_attributes_forwarded() {
        let request = ConversationRequest::new(
            InvocationSource::DialogCodeHook,
            intent(None, None, None),
        );
        let response = RecommendPortfolioHandler::new().handle(request).unwrap();
        assert_eq!(response.session_attributes, None);
        assert_eq!(serde_json::to_value(&response).unwrap()["sessionAttributes"], json!(null));
    }

    #[test]
    fn test_fulfillment_closes_with_recommendation() {
        let response = RecommendPortfolioHandler::new()
            .handle(fulfillment_turn(InvocationSource::FulfillmentCodeHook, Some("Medium")))
            .unwrap();

        assert_eq!(response.session_attributes, Some(attributes()));
        match response.dialog_action {
            DialogAction::Close { fulfillment_state, message } => {
                assert_eq!(fulfillment_state, FulfillmentState::Fulfilled);
                assert!(message.content.starts_with("Ana thank you for your information;"));
                assert!(message.content.contains("40% bonds (AGG), 60% equities (SPY)"));
            }
            other => panic!("expected Close, got {}", other.kind()),
        }
    }

    #[test]
    fn test_any_other_source_fulfills() {
        let response = RecommendPortfolioHandler::new()
            .handle(fulfillment_turn(InvocationSource::Other("Whatever".into()), Some("None")))
            .unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["dialogAction"]["type"], "Close");
        assert!(json["dialogAction"]["message"]["content"]
            .as_str()
            .unwrap()
            .contains("100% bonds (AGG), 0% equities (SPY)"));
    }

    #[test]
    fn test_fulfillment_skips_validation() {
        let request = ConversationRequest::new(
            InvocationSource::FulfillmentCodeHook,
            intent(Some("12"), Some("1"), Some("High")),
        );
        let response = RecommendPortfolioHandler::new().handle(request).unwrap();
        assert_eq!(response.dialog_action.kind(), "Close");
    }

    #[test]
    fn test_fulfillment_without_name_or_risk() {
        let request = ConversationRequest::new(
            InvocationSource::FulfillmentCodeHook,
            CurrentIntent::new(INTENT_NAME),
        );
        let response = RecommendPortfolioHandler::new().handle(request).unwrap();
        match response.dialog_action {
            DialogAction::Close { message, .. } => {
                assert_eq!(
                    message.content,
                    "Thank you for your information; based on the risk level you defined, \
                     my recommendation is to choose an investment portfolio with \
                     0% bonds (AGG), 100% equities (SPY)"
                );
            }
            other => panic!("expected Close, got {}", other.kind()),
        }
    }

    #[test]
    fn test_custom_rules() {
        let handler = RecommendPortfolioHandler::with_rules(ValidationRules {
            min_age_exclusive: 15,
            ..ValidationRules::default()
        });
        assert_eq!(handler.rules().min_age_exclusive, 15);

        let response = handler.handle(dialog_turn(Some("18"), Some("6000"))).unwrap();
        assert_eq!(response.dialog_action.kind(), "Delegate");
    }
}
