//! Entity-to-location scoring

use crate::lexicon::LocationLexicon;
use serde::Serialize;
use std::collections::HashSet;

/// Best matching location for a set of detected entities
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    /// `None` when no location matched a single keyword
    pub location: Option<String>,
    pub score: usize,
}

impl ScoreResult {
    pub fn no_match() -> Self {
        Self {
            location: None,
            score: 0,
        }
    }

    /// Location and score, if anything matched
    pub fn into_match(self) -> Option<(String, usize)> {
        match self.location {
            Some(location) if self.score > 0 => Some((location, self.score)),
            _ => None,
        }
    }
}

/// Score every lexicon location against `entities` and return the best one.
///
/// A location's score is the number of its keywords that appear verbatim in `entities`.
/// Repeated entities count once per keyword. Only a strictly higher score replaces the
/// running best, so ties go to the location listed first.
pub fn score_locations<S: AsRef<str>>(lexicon: &LocationLexicon, entities: &[S]) -> ScoreResult {
    let present: HashSet<&str> = entities.iter().map(|e| e.as_ref()).collect();
    let mut best = ScoreResult::no_match();

    for entry in lexicon.iter() {
        let score = entry
            .keywords
            .iter()
            .filter(|keyword| present.contains(keyword.as_str()))
            .count();

        tracing::trace!(location = %entry.name, score, "scored location");

        if score > best.score {
            best = ScoreResult {
                location: Some(entry.name.clone()),
                score,
            };
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paris_beats_new_york() {
        let entities = ["Eiffel Tower", "Louvre", "Seine", "Paris", "Statue of Liberty"];
        let result = score_locations(&LocationLexicon::default(), &entities);
        assert_eq!(result.into_match(), Some(("Paris".to_string(), 4)));
    }

    #[test]
    fn test_empty_entities() {
        let entities: [&str; 0] = [];
        let result = score_locations(&LocationLexicon::default(), &entities);
        assert_eq!(result, ScoreResult::no_match());
        assert_eq!(result.into_match(), None);
    }

    #[test]
    fn test_unrelated_entities() {
        let entities = ["car", "tree", "person", "Golden Gate Bridge"];
        let result = score_locations(&LocationLexicon::default(), &entities);
        assert_eq!(result, ScoreResult::no_match());
    }

    #[test]
    fn test_all_keywords_of_one_location() {
        let entities = ["Times Square", "New York", "Central Park", "Statue of Liberty", "taxi"];
        let result = score_locations(&LocationLexicon::default(), &entities);
        assert_eq!(result.location.as_deref(), Some("New York"));
        assert_eq!(result.score, 4);
    }

    #[test]
    fn test_tie_keeps_first_location() {
        let entities = ["Louvre", "Central Park"];
        let result = score_locations(&LocationLexicon::default(), &entities);
        assert_eq!(result.location.as_deref(), Some("Paris"));
        assert_eq!(result.score, 1);

        let reversed = LocationLexicon::empty()
            .with_location("New York", ["Central Park"])
            .with_location("Paris", ["Louvre"]);
        let result = score_locations(&reversed, &entities);
        assert_eq!(result.location.as_deref(), Some("New York"));
    }

    #[test]
    fn test_repeated_entity_counts_once() {
        let entities = ["Seine", "Seine", "Seine"];
        let result = score_locations(&LocationLexicon::default(), &entities);
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_membership_is_exact() {
        let entities = ["eiffel tower", "The Louvre", "Paris "];
        let result = score_locations(&LocationLexicon::default(), &entities);
        assert_eq!(result, ScoreResult::no_match());
    }

    #[test]
    fn test_empty_lexicon() {
        let entities = ["Paris"];
        let result = score_locations(&LocationLexicon::empty(), &entities);
        assert_eq!(result, ScoreResult::no_match());
    }
}
