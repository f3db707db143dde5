//! # ggd-schema — Typed Records for Gridiron GM Data Artifacts
//!
//! Projects the generic value trees produced by [`ggd_json`] into
//! strongly-typed records for the two artifact kinds the frontend
//! consumes: player contracts and team salary-cap sheets. The crate is
//! the whole ingestion surface the UI layer calls through — it loads a
//! file, maps it, and (for contracts, on the consumer's explicit
//! request) validates it.
//!
//! ## Pipeline
//!
//! ```text
//! path → load() → ggd_json::parse → Record::from_value → typed record
//!                                                   ↘ (contracts only,
//!                                                      caller-invoked)
//!                                                      validate_contract
//! ```
//!
//! ## Key Design Principles
//!
//! 1. **Mapping never fails.** Absent or wrong-typed fields fall back
//!    to the field's zero value through the documented coercion rules
//!    in [`ggd_json::coerce`]. Malformed sub-array elements are dropped,
//!    not errors.
//!
//! 2. **Unknown fields survive.** Top-level keys outside the known set
//!    land verbatim in the record's `extra` bag, so forward-compatible
//!    round-tripping is a first-class, testable property.
//!
//! 3. **Validation is separate and coded.** [`validate_contract`] is an
//!    explicit call, fail-fast, and every failure carries a stable
//!    machine-checkable code (`GG2001`–`GG2003`) next to its message.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - No caches, no shared state: every load builds an independent
//!   record graph owned by the caller.

pub mod capsheet;
pub mod contract;
mod fields;
pub mod load;
pub mod validate;

// Re-export primary types for ergonomic imports.
pub use capsheet::{CapRow, CapsheetRecord};
pub use contract::{
    ContractRecord, Guarantee, Incentive, YearTerm, SUPPORTED_API_VERSION,
};
pub use load::{load, LoadError, Record};
pub use validate::{validate_contract, ValidationError, YEAR_MAX, YEAR_MIN};
