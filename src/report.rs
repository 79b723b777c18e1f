// 📋 Validation Report - identity key → ordered error lines
// Keys keep the order of first appearance in the input batch

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};

// ============================================================================
// VALIDATION REPORT
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    entries: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Error list for `key`, created empty on first use
    pub fn entry(&mut self, key: &str) -> &mut Vec<String> {
        let position = match self.index.get(key) {
            Some(&position) => position,
            None => {
                self.entries.push((key.to_string(), Vec::new()));
                let position = self.entries.len() - 1;
                self.index.insert(key.to_string(), position);
                position
            }
        };
        &mut self.entries[position].1
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.index
            .get(key)
            .map(|&position| self.entries[position].1.as_slice())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// True when `key` is present and has no errors
    pub fn is_valid(&self, key: &str) -> bool {
        self.get(key).is_some_and(|errors| errors.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, errors)| (key.as_str(), errors.as_slice()))
    }

    /// Aggregate counts over the whole report
    pub fn summary(&self) -> BatchSummary {
        let mut errors_by_kind = BTreeMap::new();
        let mut total_errors = 0;

        for (_, errors) in self.iter() {
            for line in errors {
                total_errors += 1;
                let kind = line.split(':').next().unwrap_or(line.as_str()).to_string();
                *errors_by_kind.entry(kind).or_insert(0) += 1;
            }
        }

        let valid_customers = self.iter().filter(|(_, errors)| errors.is_empty()).count();

        BatchSummary {
            total_customers: self.len(),
            valid_customers,
            invalid_customers: self.len() - valid_customers,
            total_errors,
            errors_by_kind,
        }
    }
}

// Serialized as a JSON object in insertion order
impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, errors) in &self.entries {
            map.serialize_entry(key, errors)?;
        }
        map.end()
    }
}

// ============================================================================
// BATCH SUMMARY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_customers: usize,
    pub valid_customers: usize,
    pub invalid_customers: usize,
    pub total_errors: usize,
    pub errors_by_kind: BTreeMap<String, usize>,
}

impl BatchSummary {
    pub fn summary(&self) -> String {
        let kinds: Vec<String> = self
            .errors_by_kind
            .iter()
            .map(|(kind, count)| format!("{}={}", kind, count))
            .collect();

        format!(
            "{} customers: {} valid, {} invalid | {} errors ({})",
            self.total_customers,
            self.valid_customers,
            self.invalid_customers,
            self.total_errors,
            kinds.join(", ")
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
