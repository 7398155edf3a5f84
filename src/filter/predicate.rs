//! Filter predicate evaluation
//!
//! All present clauses must hold (AND semantics). An empty filter matches
//! every record.

use serde::Serialize;

use crate::analysis::StringProperties;
use crate::store::StringRecord;

/// A conjunction of atomic property tests.
///
/// Serialized for response metadata, so absent clauses are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StringFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl StringFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no clause is present
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Evaluate the predicate against one property bundle. Pure.
    pub fn matches(&self, properties: &StringProperties) -> bool {
        if let Some(expected) = self.is_palindrome {
            if properties.is_palindrome != expected {
                return false;
            }
        }
        if let Some(min) = self.min_length {
            if properties.length < min {
                return false;
            }
        }
        if let Some(max) = self.max_length {
            if properties.length > max {
                return false;
            }
        }
        if let Some(count) = self.word_count {
            if properties.word_count != count {
                return false;
            }
        }
        if let Some(ch) = self.contains_character {
            if !properties.contains_character(ch) {
                return false;
            }
        }
        true
    }

    /// Keep only matching records, preserving the input order
    pub fn apply(&self, records: Vec<StringRecord>) -> Vec<StringRecord> {
        records
            .into_iter()
            .filter(|r| self.matches(&r.properties))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(value: &str) -> StringProperties {
        StringProperties::compute(value)
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = StringFilter::new();
        assert!(filter.is_empty());
        assert!(filter.matches(&props("anything")));
        assert!(filter.matches(&props("")));
    }

    #[test]
    fn test_palindrome_clause() {
        let filter = StringFilter {
            is_palindrome: Some(true),
            ..Default::default()
        };
        assert!(filter.matches(&props("racecar")));
        assert!(!filter.matches(&props("hello")));

        let inverted = StringFilter {
            is_palindrome: Some(false),
            ..Default::default()
        };
        assert!(inverted.matches(&props("hello")));
    }

    #[test]
    fn test_length_range_clauses() {
        // racecar (7) is in [5, 20]; hello (5) fails the palindrome clause
        let filter = StringFilter {
            is_palindrome: Some(true),
            min_length: Some(5),
            max_length: Some(20),
            ..Default::default()
        };
        assert!(filter.matches(&props("racecar")));
        assert!(!filter.matches(&props("hello")));
        assert!(!filter.matches(&props("abba")));
    }

    #[test]
    fn test_length_bounds_are_inclusive() {
        let filter = StringFilter {
            min_length: Some(5),
            max_length: Some(5),
            ..Default::default()
        };
        assert!(filter.matches(&props("hello")));
        assert!(!filter.matches(&props("hell")));
        assert!(!filter.matches(&props("helloo")));
    }

    #[test]
    fn test_word_count_clause() {
        let filter = StringFilter {
            word_count: Some(2),
            ..Default::default()
        };
        assert!(filter.matches(&props("Hello World")));
        assert!(!filter.matches(&props("one")));
    }

    #[test]
    fn test_contains_character_clause() {
        let filter = StringFilter {
            contains_character: Some('z'),
            ..Default::default()
        };
        assert!(filter.matches(&props("zoo")));
        assert!(!filter.matches(&props("cat")));
    }

    #[test]
    fn test_conjunction_requires_all_clauses() {
        let filter = StringFilter {
            is_palindrome: Some(true),
            word_count: Some(1),
            contains_character: Some('r'),
            ..Default::default()
        };
        assert!(filter.matches(&props("racecar")));
        // Palindrome and single word, but no 'r'
        assert!(!filter.matches(&props("abba")));
    }

    #[test]
    fn test_apply_preserves_order() {
        let records = vec![
            StringRecord::analyze("zoo"),
            StringRecord::analyze("cat"),
            StringRecord::analyze("zebra"),
        ];
        let filter = StringFilter {
            contains_character: Some('z'),
            ..Default::default()
        };

        let matched = filter.apply(records);
        let values: Vec<&str> = matched.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["zoo", "zebra"]);
    }

    #[test]
    fn test_serialization_skips_absent_clauses() {
        let filter = StringFilter {
            is_palindrome: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json, serde_json::json!({"is_palindrome": true}));
    }
}
