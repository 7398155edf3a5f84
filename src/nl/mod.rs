//! Natural language query translation
//!
//! Maps a free-text phrase to a [`StringFilter`](crate::filter::StringFilter)
//! or reports that the phrase is unrecognized. The rest of the system only
//! consumes the resulting filter; nothing outside this module inspects
//! phrase text.

mod errors;
mod translator;

pub use errors::{TranslateError, TranslateResult};
pub use translator::RuleTranslator;

use crate::filter::StringFilter;

/// Phrase-to-filter translation seam.
///
/// The HTTP layer holds a translator behind this trait so the rule set can
/// be swapped without touching predicate evaluation.
pub trait QueryTranslator: Send + Sync {
    fn translate(&self, phrase: &str) -> TranslateResult<StringFilter>;
}
