//! Query parameter parsing
//!
//! Builds a [`StringFilter`] from raw HTTP query parameters. Parsing is
//! strict: unknown parameter names, unparseable values, and empty length
//! ranges are all rejected before any record is evaluated.

use std::collections::HashMap;

use super::errors::{FilterError, FilterResult};
use super::predicate::StringFilter;

impl StringFilter {
    /// Parse query parameters into a filter
    pub fn parse(params: &HashMap<String, String>) -> FilterResult<Self> {
        let mut filter = StringFilter::new();

        for (key, value) in params {
            match key.as_str() {
                "is_palindrome" => {
                    filter.is_palindrome = Some(parse_bool(key, value)?);
                }
                "min_length" => {
                    filter.min_length = Some(parse_count(key, value)?);
                }
                "max_length" => {
                    filter.max_length = Some(parse_count(key, value)?);
                }
                "word_count" => {
                    filter.word_count = Some(parse_count(key, value)?);
                }
                "contains_character" => {
                    filter.contains_character = Some(parse_single_char(key, value)?);
                }
                other => return Err(FilterError::UnknownParam(other.to_string())),
            }
        }

        if let (Some(min), Some(max)) = (filter.min_length, filter.max_length) {
            if min > max {
                return Err(FilterError::EmptyRange { min, max });
            }
        }

        Ok(filter)
    }
}

fn parse_bool(name: &str, value: &str) -> FilterResult<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(FilterError::invalid(name, "must be 'true' or 'false'")),
    }
}

fn parse_count(name: &str, value: &str) -> FilterResult<usize> {
    value
        .parse()
        .map_err(|_| FilterError::invalid(name, "must be a non-negative integer"))
}

fn parse_single_char(name: &str, value: &str) -> FilterResult<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(FilterError::invalid(name, "must be exactly one character")),
    }
}
