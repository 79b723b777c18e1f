// 👤 Customer Record - the four input fields of one customer
// Immutable input, lives only for the validation pass

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

// ============================================================================
// CUSTOMER RECORD
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    #[serde(rename = "First_Name")]
    pub first_name: String,

    #[serde(rename = "Last_Name")]
    pub last_name: String,

    /// ISO `YYYY-MM-DD`
    #[serde(rename = "Birth_Date")]
    pub birth_date: String,

    /// German-format IBAN, may contain spaces
    #[serde(rename = "IBAN")]
    pub account_id: String,
}

impl CustomerRecord {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: impl Into<String>,
        account_id: impl Into<String>,
    ) -> Self {
        CustomerRecord {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date: birth_date.into(),
            account_id: account_id.into(),
        }
    }

    /// Report grouping key `"<first>_<last>"`.
    ///
    /// Not unique: two customers with the same names share a key and their
    /// errors are merged into one report entry.
    pub fn identity_key(&self) -> String {
        format!("{}_{}", self.first_name, self.last_name)
    }
}

impl<A, B, C, D> From<(A, B, C, D)> for CustomerRecord
where
    A: Into<String>,
    B: Into<String>,
    C: Into<String>,
    D: Into<String>,
{
    fn from((first_name, last_name, birth_date, account_id): (A, B, C, D)) -> Self {
        CustomerRecord::new(first_name, last_name, birth_date, account_id)
    }
}

// ============================================================================
// LOADING
// ============================================================================

/// Load customers from a headered CSV file
/// (`First_Name,Last_Name,Birth_Date,IBAN`)
pub fn load_csv(csv_path: &Path) -> Result<Vec<CustomerRecord>> {
    let mut rdr = csv::Reader::from_path(csv_path)
        .with_context(|| format!("Failed to open CSV file: {:?}", csv_path))?;

    let mut customers = Vec::new();

    for (index, result) in rdr.deserialize().enumerate() {
        // Header is line 1
        let customer: CustomerRecord = result
            .with_context(|| format!("Failed to deserialize customer on line {}", index + 2))?;
        customers.push(customer);
    }

    debug!(path = ?csv_path, count = customers.len(), "loaded customers from CSV");

    Ok(customers)
}

/// Fixed demonstration batch, one record per kind of failure
pub fn sample_customers() -> Vec<CustomerRecord> {
    vec![
        // Empty first name
        ("", "Doe", "2005-03-28", "DE44443333222211110000").into(),
        // Under 18, identifier one character short
        ("John", "Smith", "2008-10-25", "XE345678901234567890").into(),
        // Valid
        ("Michael", "Brown", "1990-05-15", "DE89370400440532013000").into(),
        // Digits where the country code belongs
        ("Anna", "Johnson", "1985-12-07", "5511112222333344445555").into(),
        // Letter in the digit block
        ("Emily", "Taylor", "1999-08-03", "DE9876543210987654321A").into(),
        // Every rule fails
        ("", "Taylor", "2020-08-03", "1465DE9876543210987654321A").into(),
        // Identifier too long
        ("Robert", "Davis", "1992-04-12", "DE1234567890123456789012").into(),
    ]
}

// ============================================================================
// TESTS
// ============================================================================
