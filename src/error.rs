// ⚠️ Validation Errors - one variant per customer rule
// Rule violations end up in the report, faults only in the log

use thiserror::Error;

// ============================================================================
// MESSAGES
// ============================================================================

pub const EMPTY_NAME_MESSAGE: &str = "Empty name or/and surname";
pub const UNDERAGE_MESSAGE: &str = "The client's age cannot be less than 18 years!";
pub const ACCOUNT_ID_LENGTH_MESSAGE: &str = "Incorrect Length of IBAN!";
pub const ACCOUNT_ID_PREFIX_MESSAGE: &str = "The first two characters must be letters!";
pub const ACCOUNT_ID_DIGITS_MESSAGE: &str = "The last twenty characters must be digits!";

/// Separator between account identifier sub-messages
pub const MESSAGE_SEPARATOR: &str = "; ";

// ============================================================================
// VALIDATION ERROR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// First name or last name is empty
    #[error("{}", EMPTY_NAME_MESSAGE)]
    Name,

    /// Customer is younger than the minimum age
    #[error("{}", UNDERAGE_MESSAGE)]
    Age,

    /// Account identifier failed one or more format checks (in check order)
    #[error("{}", .0.join(MESSAGE_SEPARATOR))]
    AccountId(Vec<&'static str>),

    /// Birth date has no parseable year component
    #[error("cannot read a birth year from '{birth_date}'")]
    MalformedBirthDate { birth_date: String },
}

impl ValidationError {
    /// Kind label used as the report line prefix
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::Name => "NameError",
            ValidationError::Age => "AgeError",
            ValidationError::AccountId(_) => "AccountIdError",
            ValidationError::MalformedBirthDate { .. } => "MalformedBirthDate",
        }
    }

    /// True for the three customer rules, false for input faults
    pub fn is_rule_violation(&self) -> bool {
        !matches!(self, ValidationError::MalformedBirthDate { .. })
    }

    /// Format as `"<Kind>: <message>"`
    pub fn report_line(&self) -> String {
        format!("{}: {}", self.kind(), self)
    }
}

// ============================================================================
// TESTS
// ============================================================================
