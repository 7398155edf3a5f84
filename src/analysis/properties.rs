//! Derived property bundle for a stored string
//!
//! Properties are computed once at insertion and never mutated afterwards.
//! The SHA-256 digest doubles as the record's primary key, so computation
//! must be byte-for-byte reproducible for identical input.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Derived properties of a single string value.
///
/// The frequency map is a `BTreeMap` so serialized output has deterministic
/// key ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringProperties {
    /// Number of characters (Unicode scalar values)
    pub length: usize,

    /// True iff the case-folded value reads the same forward and backward,
    /// character by character. Whitespace and punctuation are significant.
    pub is_palindrome: bool,

    /// Number of distinct characters, case-sensitive
    pub unique_characters: usize,

    /// Number of whitespace-delimited words
    pub word_count: usize,

    /// Full SHA-256 hex digest of the value's UTF-8 bytes
    pub sha256_hash: String,

    /// Occurrence count for every distinct character, case-sensitive
    pub character_frequency_map: BTreeMap<char, u64>,
}

impl StringProperties {
    /// Compute the full property bundle for a value.
    ///
    /// Pure function: equal inputs always produce equal bundles.
    pub fn compute(value: &str) -> Self {
        let mut character_frequency_map: BTreeMap<char, u64> = BTreeMap::new();
        let mut length = 0usize;

        for ch in value.chars() {
            length += 1;
            *character_frequency_map.entry(ch).or_insert(0) += 1;
        }

        // split_whitespace never yields empty tokens, so runs of whitespace
        // and leading/trailing whitespace cannot inflate the count
        let word_count = value.split_whitespace().count();

        // Case-folded, literal comparison: "A man a plan" is NOT a
        // palindrome because its spaces do not mirror
        let folded: Vec<char> = value.to_lowercase().chars().collect();
        let is_palindrome = folded.iter().eq(folded.iter().rev());

        Self {
            length,
            is_palindrome,
            unique_characters: character_frequency_map.len(),
            word_count,
            sha256_hash: sha256_hex(value),
            character_frequency_map,
        }
    }

    /// True iff `ch` occurs at least once in the value
    pub fn contains_character(&self, ch: char) -> bool {
        self.character_frequency_map
            .get(&ch)
            .is_some_and(|count| *count > 0)
    }
}

/// SHA-256 hex digest of a string's UTF-8 bytes
pub fn sha256_hex(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}
