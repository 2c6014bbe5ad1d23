//! Error taxonomy for the whole crate.
//!
//! All validation happens eagerly in constructors and in the reader, so an
//! invalid notation value can never exist. Every violated invariant surfaces
//! here with enough context to reconstruct the cause.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Bad rational construction, dot overflow, out-of-range value.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("invalid chord: {0}")]
    InvalidChord(String),

    #[error("invalid beam: {0}")]
    InvalidBeam(String),

    #[error("invalid tuplet: {0}")]
    InvalidTuplet(String),

    #[error("invalid meter: {0}")]
    InvalidMeter(String),

    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// No grammar alternative matched at `pos`.
    #[error("parse error at byte {pos}: `{found}`")]
    Parse { pos: usize, found: String },

    /// The grammar matched a prefix, but unconsumed input remains.
    #[error("incomplete parse: trailing input at byte {pos}: `{rest}`")]
    IncompleteParse { pos: usize, rest: String },

    /// Quantization failed to converge to a small rational.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),
}

pub type Result<T> = std::result::Result<T, Error>;
