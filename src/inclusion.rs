//! Subnet-inclusion predicates.
//!
//! Containment is always checked against the broader network's mask: subset
//! tests scan `other`'s prefix length, superset tests scan `self`'s. Values
//! of different families are never in an inclusion relation; the predicates
//! return `false` rather than failing.

use std::cmp::Ordering;

use crate::bits::bitncmp;
use crate::models::Address;

impl Address {
    /// True when `self` is nested strictly inside `other`: a longer prefix
    /// agreeing with `other` over `other`'s full prefix length.
    ///
    /// # Examples
    /// ```
    /// use netcidr::Address;
    ///
    /// let inner = Address::network("10.1.2.0/24").unwrap();
    /// let outer = Address::network("10.1.0.0/16").unwrap();
    /// assert!(inner.is_proper_subnet_of(&outer));
    /// assert!(!outer.is_proper_subnet_of(&inner));
    /// ```
    pub fn is_proper_subnet_of(&self, other: &Address) -> bool {
        self.family == other.family
            && self.bits > other.bits
            && bitncmp(&self.octets, &other.octets, other.bits) == Ordering::Equal
    }

    /// True when `self` is nested inside or identical to `other`.
    pub fn is_subnet_of_or_equal(&self, other: &Address) -> bool {
        self.family == other.family
            && self.bits >= other.bits
            && bitncmp(&self.octets, &other.octets, other.bits) == Ordering::Equal
    }

    /// True when `other` is nested strictly inside `self`.
    pub fn is_proper_supernet_of(&self, other: &Address) -> bool {
        self.family == other.family
            && self.bits < other.bits
            && bitncmp(&self.octets, &other.octets, self.bits) == Ordering::Equal
    }

    /// True when `other` is nested inside or identical to `self`.
    pub fn is_supernet_of_or_equal(&self, other: &Address) -> bool {
        self.family == other.family
            && self.bits <= other.bits
            && bitncmp(&self.octets, &other.octets, self.bits) == Ordering::Equal
    }
}
