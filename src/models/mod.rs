//! Value types.
//!
//! This module contains the core data structures:
//! - [`Address`] - an IPv4/IPv6 host address or CIDR network block
//! - [`Family`] - the address family tag

mod address;

// Re-export public types
pub use address::{Address, Family};
