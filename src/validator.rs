// 🔍 Customer Validator - runs every rule on every customer
// Rule violations go into the report as "<Kind>: <message>" lines

use crate::config::ValidatorConfig;
use crate::customer::CustomerRecord;
use crate::error::ValidationError;
use crate::report::ValidationReport;
use crate::validators::{validate_account_id, validate_age, validate_name};
use tracing::{debug, error, info, warn};

// ============================================================================
// CUSTOMER VALIDATOR
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct CustomerValidator {
    config: ValidatorConfig,
}

impl CustomerValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ValidatorConfig) -> Self {
        CustomerValidator { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn current_year(&self) -> i32 {
        self.config.current_year()
    }

    /// Validate one customer; an empty list means every rule passed
    pub fn validate(&self, customer: &CustomerRecord) -> Vec<String> {
        self.validate_at(customer, self.current_year())
    }

    fn validate_at(&self, customer: &CustomerRecord, current_year: i32) -> Vec<String> {
        let mut errors = Vec::new();

        // Rule 1: Name present
        if let Err(err) = validate_name(&customer.first_name, &customer.last_name) {
            errors.push(err.report_line());
        }

        // Rule 2: Old enough
        match validate_age(&customer.birth_date, current_year) {
            Ok(()) => {}
            Err(err) if err.is_rule_violation() => errors.push(err.report_line()),
            Err(err) => warn!(
                customer = %customer.identity_key(),
                error = %err,
                "skipping age check"
            ),
        }

        // Rule 3: Account identifier format
        match validate_account_id(&customer.account_id) {
            Ok(()) => {}
            Err(err @ ValidationError::AccountId(_)) => errors.push(err.report_line()),
            // validate_account_id only yields AccountId today; any other
            // error from this step is logged and left out of the report
            Err(err) => error!(
                customer = %customer.identity_key(),
                error = %err,
                "account identifier check failed"
            ),
        }

        errors
    }

    /// Validate a batch; every customer gets a report entry, valid or not
    pub fn validate_batch(&self, customers: &[CustomerRecord]) -> ValidationReport {
        let current_year = self.current_year();
        let mut report = ValidationReport::new();

        for customer in customers {
            let key = customer.identity_key();
            let errors = self.validate_at(customer, current_year);

            if report.contains_key(&key) {
                debug!(customer = %key, "identity key already present, merging errors");
            }

            report.entry(&key).extend(errors);
        }

        info!(
            customers = customers.len(),
            entries = report.len(),
            current_year,
            "validated customer batch"
        );

        report
    }
}

/// Validate customers with the default configuration.
///
/// Accepts `CustomerRecord`s or `(first, last, birth_date, account_id)` tuples.
pub fn validate_customers<I, R>(records: I) -> ValidationReport
where
    I: IntoIterator<Item = R>,
    R: Into<CustomerRecord>,
{
    let customers: Vec<CustomerRecord> = records.into_iter().map(Into::into).collect();
    CustomerValidator::new().validate_batch(&customers)
}

// ============================================================================
// TESTS
// ============================================================================
