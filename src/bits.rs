//! Bit-level helpers over raw address bytes.
//!
//! The total order and the inclusion predicates both reduce to comparing a
//! leading run of bits in network bit order; the parser's host-bits check
//! walks the complementary trailing run. Sort order and equality depend on
//! these bit-for-bit.

use std::cmp::Ordering;

use crate::models::Family;

/// Compare the first `n` bits of two address buffers in network bit order.
///
/// Whole bytes compare numerically first; on a tie, the remaining `n % 8`
/// high-order bits of the next byte decide (a 1-bit is greater). Note that
/// network bit order means `192.5.5.240/28` carries `0b1111_0000` in its
/// fourth octet.
pub(crate) fn bitncmp(l: &[u8], r: &[u8], n: u8) -> Ordering {
    let whole = usize::from(n / 8);
    let order = l[..whole].cmp(&r[..whole]);
    if order != Ordering::Equal || n % 8 == 0 {
        return order;
    }
    let shift = 8 - n % 8;
    (l[whole] >> shift).cmp(&(r[whole] >> shift))
}

/// True when every address bit at position `bits` or beyond is zero, within
/// the family's address width. A full-width prefix passes trivially.
pub(crate) fn host_bits_zero(octets: &[u8; 16], bits: u8, family: Family) -> bool {
    if bits >= family.max_bits() {
        return true;
    }
    let mut mask = 0xffu8 >> (bits % 8);
    for byte in usize::from(bits / 8)..family.addr_size() {
        if octets[byte] & mask != 0 {
            return false;
        }
        mask = 0xff;
    }
    true
}
