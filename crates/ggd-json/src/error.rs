//! # Error Types — Parser Failure Taxonomy
//!
//! The tolerant parser has exactly one failure mode: the input text ran
//! out while the parser was obliged to consume more characters. Every
//! other irregularity in the input degrades to a best-effort value
//! instead of failing, so this enum stays deliberately small.

use thiserror::Error;

/// Error raised by the tolerant JSON parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input ended at a position where the grammar required more
    /// characters (for example inside a `\uXXXX` escape). The offset is
    /// the character index at which the text ran out.
    #[error("malformed input: text ended at offset {offset} while expecting more characters")]
    MalformedInput {
        /// Character offset at which the input was exhausted.
        offset: usize,
    },
}
