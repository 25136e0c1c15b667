//! Slot Validation
//!
//! Business rules for age and investment amount. One violation is reported
//! per call, age first, so the user fixes one field per turn.

use dialog_core::ValidationResult;

use crate::coercion::coerce_int;
use crate::model::slot_names;

/// Eligibility thresholds
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationRules {
    /// Users must be strictly older than this
    pub min_age_exclusive: i64,

    /// Users may be at most this old
    pub max_age_inclusive: i64,

    /// Smallest accepted investment, in USD
    pub min_investment: i64,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_age_exclusive: 21,
            max_age_inclusive: 65,
            min_investment: 5000,
        }
    }
}

impl ValidationRules {
    /// Validate whichever of the two slots are filled.
    ///
    /// Non-numeric values coerce to NaN and pass both range checks.
    pub fn validate(&self, age: Option<&str>, investment_amount: Option<&str>) -> ValidationResult {
        if let Some(raw) = age {
            let age = coerce_int(raw);
            if age <= self.min_age_exclusive || age > self.max_age_inclusive {
                return ValidationResult::invalid(slot_names::AGE, self.age_message());
            }
        }

        if let Some(raw) = investment_amount {
            let amount = coerce_int(raw);
            if amount < self.min_investment {
                return ValidationResult::invalid(
                    slot_names::INVESTMENT_AMOUNT,
                    self.investment_message(),
                );
            }
        }

        ValidationResult::valid()
    }

    fn age_message(&self) -> String {
        format!(
            "You need to be older than {} and less than {} to utilize this service. \
             Please provide your proper age.",
            self.min_age_exclusive, self.max_age_inclusive
        )
    }

    fn investment_message(&self) -> String {
        format!(
            "This service is only available for investments over ${}. \
             Please provide a proper amount.",
            self.min_investment
        )
    }
}

/// Validate with the default rules
pub fn validate(age: Option<&str>, investment_amount: Option<&str>) -> ValidationResult {
    ValidationRules::default().validate(age, investment_amount)
}
