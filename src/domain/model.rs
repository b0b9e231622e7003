use crate::utils::error::{AnalyzerError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One row of the source table: a breed's registrations for one month of one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    #[serde(rename = "Breed")]
    pub breed: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Month")]
    pub month: String,
    #[serde(rename = "Total")]
    pub total: i64,
}

impl RegistrationRecord {
    pub fn new(breed: impl Into<String>, year: i32, month: impl Into<String>, total: i64) -> Self {
        Self {
            breed: breed.into(),
            year,
            month: month.into(),
            total,
        }
    }

    /// Expects the record's breed to be normalized already, as `Dataset::new` does.
    pub fn is_breed(&self, selection: &BreedSelection) -> bool {
        self.breed == selection.as_str()
    }
}

/// The full table, in source order. Read-only once built.
///
/// Breed names are trimmed and uppercased on construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<RegistrationRecord>,
}

impl Dataset {
    pub fn new(mut records: Vec<RegistrationRecord>) -> Self {
        for record in &mut records {
            record.breed = record.breed.trim().to_uppercase();
        }
        Self { records }
    }

    pub fn records(&self) -> &[RegistrationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct breed names, uppercased.
    pub fn breed_names(&self) -> BTreeSet<String> {
        self.records
            .iter()
            .map(|r| r.breed.clone())
            .collect()
    }

    pub fn records_for<'a>(
        &'a self,
        selection: &'a BreedSelection,
    ) -> impl Iterator<Item = &'a RegistrationRecord> + 'a {
        self.records.iter().filter(move |r| r.is_breed(selection))
    }

    pub fn grand_total(&self) -> i64 {
        self.records.iter().map(|r| r.total).sum()
    }
}

/// A breed name that has been checked against the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BreedSelection(String);

impl BreedSelection {
    /// Normalizes `input` (trimmed, uppercased) and accepts it only if it is a known breed.
    pub fn parse(input: &str, valid_breeds: &BTreeSet<String>) -> Result<Self> {
        let normalized = input.trim().to_uppercase();
        if valid_breeds.contains(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(AnalyzerError::InvalidBreedInput { input: normalized })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BreedSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
