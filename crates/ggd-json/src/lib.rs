//! # ggd-json — Tolerant JSON Value Tree
//!
//! This crate is the foundation of the Gridiron GM data-ingestion core.
//! It defines the generic JSON value tree that untrusted data artifacts
//! are parsed into, together with the legacy-compatible lenient parser
//! and the explicit coercion rules the schema layer builds on. It
//! depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Closed tagged union.** [`Value`] is an exhaustive enum — object,
//!    array, string, number, bool, null — consumed with exhaustive
//!    `match` everywhere. No downcasts, no opaque dynamic values.
//!
//! 2. **Tolerance is explicit, not incidental.** The parser's leniencies
//!    (numeric fallback to literal text, permissive delimiter skip,
//!    partial containers on truncated input) are documented behavior in
//!    [`parse`], pinned by tests, and deliberately not extended to new
//!    cases. The same goes for the fallback rules in [`coerce`].
//!
//! 3. **One failure mode.** The only way a parse fails is
//!    [`ParseError::MalformedInput`] — the text ended while the parser
//!    had to consume more characters. Everything else degrades.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ggd-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone` and implement `Serialize`.

pub mod coerce;
pub mod error;
pub mod parse;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use error::ParseError;
pub use parse::parse;
pub use value::{Number, Value};
