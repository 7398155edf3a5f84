//! Response formatting
//!
//! List-style endpoints wrap their records with a count and echo the filter
//! that produced them; single-record endpoints return the record directly.

use serde::Serialize;

use crate::filter::StringFilter;
use crate::store::StringRecord;

/// List response for `GET /strings`
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    #[serde(skip_serializing_if = "StringFilter::is_empty")]
    pub filters_applied: StringFilter,
}

impl ListResponse {
    pub fn new(data: Vec<StringRecord>, filters_applied: StringFilter) -> Self {
        let count = data.len();
        Self {
            data,
            count,
            filters_applied,
        }
    }
}

/// How a natural-language phrase was understood
#[derive(Debug, Clone, Serialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub understood_filters: StringFilter,
}

/// List response for the natural-language filter endpoint
#[derive(Debug, Clone, Serialize)]
pub struct NlListResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

impl NlListResponse {
    pub fn new(data: Vec<StringRecord>, original: String, filter: StringFilter) -> Self {
        let count = data.len();
        Self {
            data,
            count,
            interpreted_query: InterpretedQuery {
                original,
                understood_filters: filter,
            },
        }
    }
}
