//! Slot Validation
//!
//! Checks the numeric slots a user has typed so far. Age is checked before
//! the investment amount and only the first violation is reported, so the
//! bot re-prompts for one field at a time.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::model::{Message, SlotName};

pub const AGE_OUT_OF_RANGE_MESSAGE: &str =
    "You should be at least between 1 and 65 years to use this service, \
     please provide a different age.";

pub const AGE_NOT_A_NUMBER_MESSAGE: &str =
    "Please tell me your age as a whole number of years, for example 35.";

pub const AMOUNT_TOO_LOW_MESSAGE: &str =
    "The amount to convert should be greater than 5000, \
     please provide a correct investment amount.";

pub const AMOUNT_NOT_A_NUMBER_MESSAGE: &str =
    "Please tell me the investment amount as a whole number of dollars, for example 10000.";

/// Bounds applied to user input
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Youngest accepted age (inclusive)
    pub min_age: i64,

    /// First rejected age above the accepted range (exclusive)
    pub max_age_exclusive: i64,

    /// Smallest accepted investment amount (inclusive)
    pub min_investment: Decimal,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            min_age: 1,
            max_age_exclusive: 65,
            min_investment: dec!(5000),
        }
    }
}

impl ValidationPolicy {
    pub const fn with_age_range(mut self, min_age: i64, max_age_exclusive: i64) -> Self {
        self.min_age = min_age;
        self.max_age_exclusive = max_age_exclusive;
        self
    }

    pub const fn with_min_investment(mut self, min_investment: Decimal) -> Self {
        self.min_investment = min_investment;
        self
    }

    /// Validate raw slot values, reporting the first violation
    pub fn validate(&self, age: Option<&str>, investment_amount: Option<&str>) -> ValidationResult {
        if let Some(raw) = age {
            match parse_whole_number(raw) {
                None => return ValidationResult::invalid(SlotName::Age, AGE_NOT_A_NUMBER_MESSAGE),
                Some(age) if !self.accepts_age(age) => {
                    return ValidationResult::invalid(SlotName::Age, AGE_OUT_OF_RANGE_MESSAGE);
                }
                Some(_) => {}
            }
        }

        if let Some(raw) = investment_amount {
            match parse_whole_number(raw) {
                None => {
                    return ValidationResult::invalid(
                        SlotName::InvestmentAmount,
                        AMOUNT_NOT_A_NUMBER_MESSAGE,
                    );
                }
                Some(amount) if amount < self.min_investment => {
                    return ValidationResult::invalid(
                        SlotName::InvestmentAmount,
                        AMOUNT_TOO_LOW_MESSAGE,
                    );
                }
                Some(_) => {}
            }
        }

        ValidationResult::valid()
    }

    fn accepts_age(&self, age: Decimal) -> bool {
        age >= Decimal::from(self.min_age) && age < Decimal::from(self.max_age_exclusive)
    }
}

/// Validate with the default policy
pub fn validate(age: Option<&str>, investment_amount: Option<&str>) -> ValidationResult {
    ValidationPolicy::default().validate(age, investment_amount)
}

/// Parse a slot value as an integer. Fractions, exponents and words are
/// rejected instead of being coerced into something a range check could pass.
fn parse_whole_number(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // Past Decimal's range only the sign matters to the bounds.
    let magnitude = Decimal::from_str(digits).unwrap_or(Decimal::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Outcome of validating the current slots
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub violated_slot: Option<SlotName>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

impl ValidationResult {
    pub const fn valid() -> Self {
        Self {
            is_valid: true,
            violated_slot: None,
            message: None,
        }
    }

    pub fn invalid(slot: SlotName, message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            violated_slot: Some(slot),
            message: Some(Message::plain_text(message)),
        }
    }

    /// The violated slot and its message, if validation failed
    pub fn violation(&self) -> Option<(SlotName, &Message)> {
        self.violated_slot.zip(self.message.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_ages_in_range() {
        for age in 1..=64 {
            let result = validate(Some(&age.to_string()), Some("5000"));
            assert!(result.is_valid, "age {age} should be accepted");
            assert_eq!(result.violated_slot, None);
        }
    }

    #[test]
    fn test_rejects_ages_out_of_range() {
        for age in ["0", "65", "66", "-1"] {
            let result = validate(Some(age), Some("5000"));
            assert!(!result.is_valid, "age {age} should be rejected");
            assert_eq!(result.violated_slot, Some(SlotName::Age));
            assert!(result.message.unwrap().content.contains("between 1 and 65"));
        }
    }

    #[test]
    fn test_investment_amount_threshold() {
        for amount in ["5000", "5001", "10000", "250000000"] {
            assert!(validate(Some("30"), Some(amount)).is_valid);
            assert!(validate(None, Some(amount)).is_valid);
        }

        for amount in ["0", "4999"] {
            let result = validate(Some("30"), Some(amount));
            assert_eq!(result.violated_slot, Some(SlotName::InvestmentAmount));
            assert_eq!(result.message.unwrap().content, AMOUNT_TOO_LOW_MESSAGE);
        }
    }

    #[test]
    fn test_huge_whole_numbers_are_classified_by_sign() {
        let huge = "100000000000000000000000000000";
        assert!(validate(Some("30"), Some(huge)).is_valid);

        let result = validate(Some("30"), Some(&format!("-{huge}")));
        assert_eq!(result.violated_slot, Some(SlotName::InvestmentAmount));
        assert_eq!(result.message.unwrap().content, AMOUNT_TOO_LOW_MESSAGE);

        for age in [huge.to_string(), format!("-{huge}")] {
            let result = validate(Some(&age), None);
            assert_eq!(result.violated_slot, Some(SlotName::Age));
            assert_eq!(result.message.unwrap().content, AGE_OUT_OF_RANGE_MESSAGE);
        }
    }

    #[test]
    fn test_signs() {
        assert!(validate(Some("+30"), Some("+5000")).is_valid);
        for amount in ["--5000", "5-000", "+", "-"] {
            let result = validate(None, Some(amount));
            assert_eq!(result.message.unwrap().content, AMOUNT_NOT_A_NUMBER_MESSAGE, "{amount:?}");
        }
    }

    #[test]
    fn test_age_checked_first() {
        let result = validate(Some("70"), Some("10"));
        assert_eq!(result.violated_slot, Some(SlotName::Age));
    }

    #[test]
    fn test_absent_slots_are_valid() {
        assert_eq!(validate(None, None), ValidationResult::valid());
    }

    #[test]
    fn test_non_numeric_input_is_a_format_violation() {
        let result = validate(Some("thirty"), Some("5000"));
        assert_eq!(result.violated_slot, Some(SlotName::Age));
        assert_eq!(result.message.unwrap().content, AGE_NOT_A_NUMBER_MESSAGE);

        for amount in ["lots", "5000.5", "1e9", ""] {
            let result = validate(Some("30"), Some(amount));
            assert_eq!(result.violated_slot, Some(SlotName::InvestmentAmount), "{amount:?}");
            assert_eq!(result.message.unwrap().content, AMOUNT_NOT_A_NUMBER_MESSAGE);
        }
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert!(validate(Some(" 42 "), Some(" 7500\n")).is_valid);
    }

    #[test]
    fn test_custom_policy() {
        let policy = ValidationPolicy::default()
            .with_age_range(18, 100)
            .with_min_investment(dec!(100));

        assert!(policy.validate(Some("80"), Some("100")).is_valid);
        assert_eq!(
            policy.validate(Some("17"), None).violated_slot,
            Some(SlotName::Age)
        );
    }

    #[test]
    fn test_result_serialization_omits_empty_fields() {
        let value = serde_json::to_value(ValidationResult::valid()).unwrap();
        assert_eq!(value, serde_json::json!({"isValid": true}));

        let value = serde_json::to_value(validate(Some("99"), None)).unwrap();
        assert_eq!(value["violatedSlot"], "age");
        assert_eq!(value["message"]["contentType"], "PlainText");
    }
}
