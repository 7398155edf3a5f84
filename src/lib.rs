//! strand - a strict, deterministic string analysis and filtering service
//!
//! Accepts strings over HTTP, computes a fixed property bundle for each
//! (length, palindrome flag, unique characters, word count, SHA-256 content
//! hash, character frequencies), stores them keyed by content hash, and
//! serves retrieval and filtering — including a rule-based
//! natural-language-to-filter translation.

pub mod analysis;
pub mod cli;
pub mod filter;
pub mod http_server;
pub mod nl;
pub mod store;
