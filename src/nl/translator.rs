//! Rule-based phrase translation
//!
//! Recognized phrase shapes:
//! - "single word"                      -> word_count = 1
//! - "word count N" / "word count of N" -> word_count = N
//! - "palindrome" / "palindromic"       -> is_palindrome = true
//! - "longer than N [characters]"       -> min_length = N + 1
//! - "containing the letter X"          -> contains_character = X
//! - "containing the first vowel"       -> contains_character = 'a'
//!
//! Several rules may fire on one phrase; their clauses combine into a
//! single conjunctive filter. Matching is case-insensitive.

use regex::Regex;

use super::errors::{TranslateError, TranslateResult};
use super::QueryTranslator;
use crate::filter::StringFilter;

/// Regex-driven [`QueryTranslator`]
pub struct RuleTranslator {
    single_word: Regex,
    word_count: Regex,
    longer_than: Regex,
    contains_letter: Regex,
    first_vowel: Regex,
}

impl RuleTranslator {
    pub fn new() -> Self {
        // Patterns are literals; compilation cannot fail
        Self {
            single_word: Regex::new(r"\bsingle word\b").expect("valid pattern"),
            word_count: Regex::new(r"\bword count(?: of)? (\d+)\b").expect("valid pattern"),
            longer_than: Regex::new(r"\blonger than (\d+)\b").expect("valid pattern"),
            contains_letter: Regex::new(r"\bcontain(?:s|ing)?(?: the)? letter (\w)\b")
                .expect("valid pattern"),
            first_vowel: Regex::new(r"\b(?:the )?first vowel\b").expect("valid pattern"),
        }
    }
}

impl Default for RuleTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryTranslator for RuleTranslator {
    fn translate(&self, phrase: &str) -> TranslateResult<StringFilter> {
        let phrase = phrase.trim();
        if phrase.is_empty() {
            return Err(TranslateError::EmptyQuery);
        }
        let lowered = phrase.to_lowercase();

        let mut filter = StringFilter::new();

        if self.single_word.is_match(&lowered) {
            filter.word_count = Some(1);
        }

        if let Some(caps) = self.word_count.captures(&lowered) {
            if let Ok(n) = caps[1].parse::<usize>() {
                filter.word_count = Some(n);
            }
        }

        if lowered.contains("palindrom") {
            filter.is_palindrome = Some(true);
        }

        // "longer than 10 characters" means at least 11
        if let Some(caps) = self.longer_than.captures(&lowered) {
            if let Ok(n) = caps[1].parse::<usize>() {
                filter.min_length = Some(n.saturating_add(1));
            }
        }

        if let Some(caps) = self.contains_letter.captures(&lowered) {
            if let Some(ch) = caps[1].chars().next() {
                filter.contains_character = Some(ch);
            }
        } else if self.first_vowel.is_match(&lowered) {
            filter.contains_character = Some('a');
        }

        if filter.is_empty() {
            return Err(TranslateError::Unrecognized(phrase.to_string()));
        }
        Ok(filter)
    }
}
