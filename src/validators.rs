// ✅ Customer Rules - name, age and account identifier checks
// Each rule is a pure predicate returning Result<(), ValidationError>

use crate::error::{
    ValidationError, ACCOUNT_ID_DIGITS_MESSAGE, ACCOUNT_ID_LENGTH_MESSAGE,
    ACCOUNT_ID_PREFIX_MESSAGE,
};

/// Customers younger than this are rejected
pub const MIN_AGE: i32 = 18;

/// German IBAN: 2 letters + 20 digits
pub const ACCOUNT_ID_LENGTH: usize = 22;
const COUNTRY_CODE_LENGTH: usize = 2;

// ============================================================================
// NAME
// ============================================================================

pub fn validate_name(first_name: &str, last_name: &str) -> Result<(), ValidationError> {
    if first_name.is_empty() || last_name.is_empty() {
        return Err(ValidationError::Name);
    }
    Ok(())
}

// ============================================================================
// AGE
// ============================================================================

/// Age is `current_year - birth_year`; month and day are ignored.
pub fn validate_age(birth_date: &str, current_year: i32) -> Result<(), ValidationError> {
    let birth_year = birth_year(birth_date)?;

    if current_year - birth_year < MIN_AGE {
        return Err(ValidationError::Age);
    }
    Ok(())
}

fn birth_year(birth_date: &str) -> Result<i32, ValidationError> {
    let year = birth_date.split('-').next().unwrap_or_default();

    year.trim()
        .parse::<i32>()
        .map_err(|_| ValidationError::MalformedBirthDate {
            birth_date: birth_date.to_string(),
        })
}

// ============================================================================
// ACCOUNT IDENTIFIER
// ============================================================================

/// All three format checks run; every failure is reported in check order.
/// The digit check covers everything after the country code, whatever the length.
pub fn validate_account_id(account_id: &str) -> Result<(), ValidationError> {
    let compact: Vec<char> = account_id.chars().filter(|c| !c.is_whitespace()).collect();
    let split = compact.len().min(COUNTRY_CODE_LENGTH);
    let (country_code, digits) = compact.split_at(split);

    let mut errors = Vec::new();

    if compact.len() != ACCOUNT_ID_LENGTH {
        errors.push(ACCOUNT_ID_LENGTH_MESSAGE);
    }

    if !all_chars(country_code, |c| c.is_ascii_alphabetic()) {
        errors.push(ACCOUNT_ID_PREFIX_MESSAGE);
    }

    if !all_chars(digits, |c| c.is_ascii_digit()) {
        errors.push(ACCOUNT_ID_DIGITS_MESSAGE);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::AccountId(errors))
    }
}

// Empty input never passes
fn all_chars(chars: &[char], predicate: fn(char) -> bool) -> bool {
    !chars.is_empty() && chars.iter().copied().all(predicate)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn account_errors(account_id: &str) -> Vec<&'static str> {
        match validate_account_id(account_id) {
            Err(ValidationError::AccountId(errors)) => errors,
            other => panic!("expected AccountId error, got {:?}", other),
        }
    }

    #[test]
    fn test_name_valid() {
        assert!(validate_name("John", "Doe").is_ok());
    }

    #[test]
    fn test_name_empty() {
        assert_eq!(validate_name("", "Doe"), Err(ValidationError::Name));
        assert_eq!(validate_name("John", ""), Err(ValidationError::Name));
        assert_eq!(validate_name("", ""), Err(ValidationError::Name));
    }

    #[test]
    fn test_age_boundary() {
        assert_eq!(validate_age("2016-01-01", 2026), Err(ValidationError::Age));
        assert_eq!(validate_age("2009-01-01", 2026), Err(ValidationError::Age));
        assert!(validate_age("2008-12-31", 2026).is_ok());
        assert!(validate_age("2007-06-01", 2026).is_ok());
    }

    #[test]
    fn test_age_ignores_month_and_day() {
        // Not 18 yet on the calendar, but the year difference is 18
        assert!(validate_age("2008-12-31", 2026).is_ok());
    }

    #[test]
    fn test_age_malformed_year() {
        let result = validate_age("not-a-date", 2026);
        assert_eq!(
            result,
            Err(ValidationError::MalformedBirthDate {
                birth_date: "not-a-date".to_string()
            })
        );
        assert!(validate_age("", 2026).is_err());
    }

    #[test]
    fn test_account_id_valid() {
        assert!(validate_account_id("DE89370400440532013000").is_ok());
        assert!(validate_account_id("DE89 3704 0044 0532 0130 00").is_ok());
    }

    #[test]
    fn test_account_id_strips_unicode_whitespace() {
        assert!(validate_account_id("DE89\t3704\n0044\u{00A0}0532 0130 00").is_ok());
        assert!(validate_account_id(" DE89370400440532013000\r\n").is_ok());
    }

    #[test]
    fn test_account_id_rejects_non_digit_numerals() {
        let fraction = format!("DE½{}", "1".repeat(19));
        assert_eq!(account_errors(&fraction), vec![ACCOUNT_ID_DIGITS_MESSAGE]);

        let roman = format!("DE{}Ⅻ", "1".repeat(19));
        assert_eq!(account_errors(&roman), vec![ACCOUNT_ID_DIGITS_MESSAGE]);
    }

    #[test]
    fn test_account_id_rejects_letter_numbers_in_prefix() {
        let roman = format!("ⅫⅫ{}", "1".repeat(20));
        assert_eq!(account_errors(&roman), vec![ACCOUNT_ID_PREFIX_MESSAGE]);
    }

    #[test]
    fn test_account_id_too_short() {
        // Both leading chars are letters, the rest are digits
        assert_eq!(
            account_errors("XE345678901234567890"),
            vec![ACCOUNT_ID_LENGTH_MESSAGE]
        );
    }

    #[test]
    fn test_account_id_too_long() {
        assert_eq!(
            account_errors("DE1234567890123456789012"),
            vec![ACCOUNT_ID_LENGTH_MESSAGE]
        );
    }

    #[test]
    fn test_account_id_digit_prefix() {
        assert_eq!(
            account_errors("5511112222333344445555"),
            vec![ACCOUNT_ID_PREFIX_MESSAGE]
        );
    }

    #[test]
    fn test_account_id_letter_in_suffix() {
        assert_eq!(
            account_errors("DE9876543210987654321A"),
            vec![ACCOUNT_ID_DIGITS_MESSAGE]
        );
    }

    #[test]
    fn test_account_id_every_check_fails() {
        let err = validate_account_id("1465DE9876543210987654321A").unwrap_err();

        assert_eq!(
            err.to_string(),
            "Incorrect Length of IBAN!; The first two characters must be letters!; \
             The last twenty characters must be digits!"
        );
    }

    #[test]
    fn test_account_id_empty_and_short() {
        assert_eq!(
            account_errors(""),
            vec![
                ACCOUNT_ID_LENGTH_MESSAGE,
                ACCOUNT_ID_PREFIX_MESSAGE,
                ACCOUNT_ID_DIGITS_MESSAGE
            ]
        );
        assert_eq!(
            account_errors("DE"),
            vec![ACCOUNT_ID_LENGTH_MESSAGE, ACCOUNT_ID_DIGITS_MESSAGE]
        );
    }
}
