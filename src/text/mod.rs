//! Deterministic text transforms over PR titles and bodies.
//!
//! Every function here is total: any string input (including the empty
//! string) produces a value, never an error or a panic.

mod anchor;
mod issues;
mod summary;
mod wrap;

pub use anchor::{STOP_WORDS, generate_anchor};
pub use issues::extract_issues;
pub use summary::{normalize_summary, quote_identifiers};
pub use wrap::{DEFAULT_WRAP_WIDTH, wrap_body};
