//! Known locations and the keywords that identify them

use crate::error::{ImpromptuError, ImpromptuResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One location and the entity descriptions that point at it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationEntry {
    pub name: String,
    pub keywords: Vec<String>,
}

impl LocationEntry {
    pub fn new<I, S>(name: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered mapping from location name to keywords.
///
/// Order matters: when two locations score the same, the one listed first wins. In JSON the
/// lexicon is an array of `{ "name": ..., "keywords": [...] }` objects so the order survives
/// a round trip through the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationLexicon {
    entries: Vec<LocationEntry>,
}

impl Default for LocationLexicon {
    fn default() -> Self {
        Self {
            entries: vec![
                LocationEntry::new("Paris", ["Eiffel Tower", "Louvre", "Seine", "Paris"]),
                LocationEntry::new(
                    "New York",
                    ["Statue of Liberty", "Central Park", "Times Square", "New York"],
                ),
            ],
        }
    }
}

impl LocationLexicon {
    /// An empty lexicon; nothing ever matches it
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a location, keeping insertion order
    pub fn with_location<I, S>(mut self, name: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.push(LocationEntry::new(name, keywords));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocationEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn validate(&self) -> ImpromptuResult<()> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if entry.name.trim().is_empty() {
                return Err(ImpromptuError::invalid_input_field(
                    "Location name cannot be empty",
                    "lexicon.name",
                ));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(ImpromptuError::invalid_input_field(
                    format!("Duplicate location in lexicon: {}", entry.name),
                    "lexicon.name",
                ));
            }
        }
        Ok(())
    }
}
