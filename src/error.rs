//! Error types for netcidr.
//!
//! One crate-level [`enum@Error`] covers every fallible operation. Parsing
//! and formatting return errors; comparison and inclusion are total and have
//! no error path.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors from constructing or formatting an [`crate::Address`].
#[derive(Error, Debug)]
pub enum Error {
    /// Allocation for a result value failed. Resource exhaustion on the
    /// caller's side, not an input error.
    #[error("out of memory: {0}")]
    Memory(#[from] TryReserveError),

    /// The text does not decode as an address of the detected family, or its
    /// prefix length exceeds the family maximum.
    #[error("invalid address syntax: {input:?}")]
    AddressFormat {
        /// The rejected input text.
        input: String,
    },

    /// A network block has nonzero address bits beyond its prefix length.
    #[error("invalid cidr value: {input:?} has bits set beyond the /{bits} netmask")]
    CidrFormat {
        /// The rejected input text.
        input: String,
        /// The declared prefix length.
        bits: u8,
    },

    /// The formatter could not write into its pre-sized output buffer.
    #[error("could not encode address text")]
    Encoding,
}
