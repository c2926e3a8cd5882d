//! Canonical value type for IP network addresses.
//!
//! [`Address`] models both host addresses (`192.0.2.1`, `2001:db8::1`) and
//! CIDR network blocks (`192.0.2.0/24`, `2001:db8::/32`) for IPv4 and IPv6:
//!
//! - parsing from text, with host-bits validation for network blocks
//! - canonical text output, including the `/<prefix>` suffix rules
//! - a total order driving sorting, equality and the relational operators
//! - subnet-inclusion predicates
//!
//! All operations are pure functions over immutable values; there is no
//! shared state and no I/O.
//!
//! ```
//! use netcidr::Address;
//!
//! let mut nets = vec![
//!     Address::network("10.1.0.0/16").unwrap(),
//!     Address::network("10.0.0.0/8").unwrap(),
//!     Address::network("2001:db8::/32").unwrap(),
//! ];
//! nets.sort();
//! assert_eq!(nets[0].to_string(), "10.0.0.0/8");
//! assert!(nets[1].is_proper_subnet_of(&nets[0]));
//! ```

mod bits;
mod error;
mod inclusion;
mod models;
mod ordering;

pub use error::Error;
pub use models::{Address, Family};
