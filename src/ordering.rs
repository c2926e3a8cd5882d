//! Total order over [`Address`] values.
//!
//! The network part is the major sort key: values compare on their common
//! prefix bits first, then on prefix length (shorter first), and finally on
//! the whole unmasked address as a host-part tiebreak. Families never
//! compare equal; IPv4 sorts before IPv6. Equality and the six relational
//! operators all derive from this one comparison, and the host/network tag
//! never participates.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::bits::bitncmp;
use crate::models::Address;

impl Ord for Address {
    fn cmp(&self, other: &Address) -> Ordering {
        if self.family != other.family {
            return self.family.cmp(&other.family);
        }
        bitncmp(&self.octets, &other.octets, self.bits.min(other.bits))
            .then_with(|| self.bits.cmp(&other.bits))
            .then_with(|| bitncmp(&self.octets, &other.octets, self.family.max_bits()))
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Address) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Address) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Address {}

// Hash must agree with the comparator's notion of equality, so the
// host/network tag and the bytes beyond the family width stay out.
impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.family.hash(state);
        self.bits.hash(state);
        self.octets().hash(state);
    }
}
