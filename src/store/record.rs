//! Stored string record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::StringProperties;

/// A stored string together with its derived properties.
///
/// `id` is the SHA-256 hex digest of `value` and serves as both the
/// uniqueness key and the record's public identifier. Everything except
/// deletion is immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringRecord {
    pub id: String,
    pub value: String,
    pub properties: StringProperties,
    pub created_at: DateTime<Utc>,
}

impl StringRecord {
    /// Analyze a value and stamp the creation time.
    ///
    /// The property bundle is computed here, so a record can never exist
    /// with properties inconsistent with its value.
    pub fn analyze(value: impl Into<String>) -> Self {
        let value = value.into();
        let properties = StringProperties::compute(&value);
        Self {
            id: properties.sha256_hash.clone(),
            value,
            properties,
            created_at: Utc::now(),
        }
    }
}
