// Customer Validation - Core Library
// Exposes all modules for use in the CLI and tests

pub mod config;     // Reference year + JSON/env loading
pub mod customer;   // Customer records, CSV loading, demo batch
pub mod error;      // Validation error kinds and messages
pub mod logging;    // tracing-subscriber setup for the binary
pub mod report;     // Ordered report + batch summary
pub mod validator;  // Orchestration over a batch
pub mod validators; // Name, age and account identifier rules

// Re-export commonly used types
pub use config::ValidatorConfig;
pub use customer::{load_csv, sample_customers, CustomerRecord};
pub use error::ValidationError;
pub use report::{BatchSummary, ValidationReport};
pub use validator::{validate_customers, CustomerValidator};
pub use validators::{validate_account_id, validate_age, validate_name, MIN_AGE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
