//! String property analysis
//!
//! Pure, deterministic computation of derived properties for a submitted
//! string. No I/O, no error conditions: every input, including the empty
//! string, produces a fully-formed property bundle.

mod properties;

pub use properties::{sha256_hex, StringProperties};
