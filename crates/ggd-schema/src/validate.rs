//! # Contract Validation — Coded Domain Checks
//!
//! Enforces schema-version compatibility and domain invariants on a
//! mapped [`ContractRecord`]. Pure, side-effect free, and fail-fast:
//! exactly one violation is reported per call, the first one found in
//! check order.
//!
//! Every failure carries a stable machine-checkable code next to its
//! human-readable message. The frontend keys its failure banner off the
//! code; the message is display text only. The structural and content
//! checks on `terms` deliberately share code `GG2003` — callers only
//! need to know "the terms are broken", not which sub-case.
//!
//! Cap sheets have no validator: successful mapping is their whole
//! acceptance criterion (trusted upstream output).

use thiserror::Error;

use crate::contract::{ContractRecord, SUPPORTED_API_VERSION};

/// Earliest calendar year a contract term may name.
pub const YEAR_MIN: i64 = 2000;
/// Latest calendar year a contract term may name.
pub const YEAR_MAX: i64 = 2100;

/// A contract validation failure. `Display` gives the banner message;
/// [`ValidationError::code`] gives the stable code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No contract payload was supplied at all.
    #[error("Null contract payload")]
    NullPayload,

    /// The schema tag is not the single supported value.
    #[error("Version {0} not supported")]
    UnsupportedVersion(String),

    /// The contract carries no year terms.
    #[error("Missing terms[]")]
    MissingTerms,

    /// A term year falls outside `[YEAR_MIN, YEAR_MAX]`.
    #[error("Term year out of range")]
    TermYearOutOfRange {
        /// The offending year.
        year: i64,
    },

    /// A term carries a negative monetary amount.
    #[error("Negative amounts")]
    NegativeAmounts {
        /// The year of the offending term.
        year: i64,
    },
}

impl ValidationError {
    /// The stable machine-checkable error code.
    pub const fn code(&self) -> &'static str {
        match self {
            ValidationError::NullPayload => "GG2001",
            ValidationError::UnsupportedVersion(_) => "GG2002",
            ValidationError::MissingTerms
            | ValidationError::TermYearOutOfRange { .. }
            | ValidationError::NegativeAmounts { .. } => "GG2003",
        }
    }
}

/// Validate a mapped contract, failing fast on the first violation.
///
/// `None` is the absent-payload sentinel and fails with `GG2001`.
/// Checks run in a fixed order: presence, schema version, non-empty
/// terms, term-year range, non-negative amounts — so a contract broken
/// in several ways reports the earliest check's code.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found; `Ok(())` means every
/// invariant holds.
pub fn validate_contract(
    contract: Option<&ContractRecord>,
) -> Result<(), ValidationError> {
    let Some(contract) = contract else {
        return Err(ValidationError::NullPayload);
    };

    if contract.api_version != SUPPORTED_API_VERSION {
        return Err(ValidationError::UnsupportedVersion(
            contract.api_version.clone(),
        ));
    }

    if contract.terms.is_empty() {
        return Err(ValidationError::MissingTerms);
    }

    for term in &contract.terms {
        if term.year < YEAR_MIN || term.year > YEAR_MAX {
            return Err(ValidationError::TermYearOutOfRange { year: term.year });
        }
        let amounts = [
            term.base,
            term.signing_prorated,
            term.roster_bonus,
            term.workout_bonus,
            term.guaranteed_base,
        ];
        if amounts.iter().any(|amount| *amount < 0) {
            return Err(ValidationError::NegativeAmounts { year: term.year });
        }
    }

    Ok(())
}
