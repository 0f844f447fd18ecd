//! Lookup tables: the header vocabulary and the state-to-capital map.

use crate::error::{Result, VerifyError};
use csv::StringRecord;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Column names expected somewhere in the header row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderVocabulary {
    terms: Vec<String>,
}

impl HeaderVocabulary {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            terms: terms.into_iter().map(|t| t.as_ref().to_lowercase()).collect(),
        }
    }

    /// Number of terms found as substrings of the space-joined, lowercased row.
    pub fn score(&self, row: &[String]) -> usize {
        let row_str = row.join(" ").to_lowercase();
        self.terms.iter().filter(|t| row_str.contains(t.as_str())).count()
    }
}

impl Default for HeaderVocabulary {
    fn default() -> Self {
        Self::new([
            "S/N", "State", "Name", "File No", "Conraiss", "Posting", "Station", "Mandate",
        ])
    }
}

/// A row of a location override file
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "lowercase")]
pub struct LocationRow {
    pub state: String,
    pub capital: String,
}

/// Case-insensitive mapping from a location name to its display capital
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationMap {
    entries: HashMap<String, String>,
}

impl LocationMap {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.as_ref().trim().to_lowercase(), v.into()))
                .collect(),
        }
    }

    /// Load a `state,capital` CSV. Rows with an empty state or capital are skipped.
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;

        // Accept `State,Capital` as well as `state,capital`
        let headers: StringRecord = reader.headers()?.iter().map(|h| h.to_lowercase()).collect();
        reader.set_headers(headers);

        let mut entries = Vec::new();
        for row in reader.deserialize() {
            let row: LocationRow = row?;
            if row.state.is_empty() || row.capital.is_empty() {
                log::warn!("Skipping incomplete location entry: {:?}", row);
                continue;
            }
            entries.push((row.state, row.capital));
        }

        if entries.is_empty() {
            return Err(VerifyError::LocationTable(format!(
                "no usable entries in {}",
                path.display()
            )));
        }

        Ok(Self::new(entries))
    }

    /// Trim and lowercase `raw`, then look it up.
    pub fn lookup(&self, raw: &str) -> Option<&str> {
        self.entries.get(&raw.trim().to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LocationMap {
    fn default() -> Self {
        Self::new([
            ("niger", "Minna"),
            ("abuja", "Abuja"),
            ("fct", "Abuja"),
            ("kano", "Kano"),
            ("lagos", "Ikeja"),
            ("gombe", "Gombe"),
        ])
    }
}
