//! IP address and CIDR network block value type.
//!
//! Provides [`Address`], a canonical representation of IPv4/IPv6 host
//! addresses and CIDR network blocks, with parsing from text and canonical
//! text output.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::bits::host_bits_zero;
use crate::error::Error;

/// Worst-case canonical text length: an IPv6 address with an embedded
/// dotted-quad and a mask suffix. The output buffer is reserved at this size
/// up front so the encoding step itself cannot run out of room.
const MAX_TEXT_LEN: usize = "xxxx:xxxx:xxxx:xxxx:xxxx:xxxx:255.255.255.255/128".len();

/// Address family of an [`Address`].
///
/// The derived order (IPv4 before IPv6) is the cross-family sort order;
/// values of different families never compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    /// IPv4, 32-bit addresses.
    Ipv4,
    /// IPv6, 128-bit addresses.
    Ipv6,
}

impl Family {
    /// Address width in bits: 32 for IPv4, 128 for IPv6.
    pub fn max_bits(self) -> u8 {
        match self {
            Family::Ipv4 => 32,
            Family::Ipv6 => 128,
        }
    }

    /// Address storage size in bytes: 4 for IPv4, 16 for IPv6.
    pub fn addr_size(self) -> usize {
        match self {
            Family::Ipv4 => 4,
            Family::Ipv6 => 16,
        }
    }
}

/// An IPv4/IPv6 host address or CIDR network block.
///
/// The value is immutable once constructed. For network blocks every address
/// bit beyond the prefix length is guaranteed zero; this is enforced at
/// construction and never re-checked. IPv4 addresses occupy the first 4
/// bytes of the 16-byte buffer and the rest stays zero.
///
/// # Examples
/// ```
/// use netcidr::Address;
///
/// let net = Address::parse("10.0.0.0/8", true).unwrap();
/// assert_eq!(net.prefix_len(), 8);
/// assert_eq!(net.to_string(), "10.0.0.0/8");
///
/// let host = Address::parse("2001:db8::1", false).unwrap();
/// assert_eq!(host.to_string(), "2001:db8::1");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Address {
    pub(crate) family: Family,
    pub(crate) bits: u8,
    pub(crate) octets: [u8; 16],
    pub(crate) network: bool,
}

impl Address {
    /// Parse an address from text.
    ///
    /// Any `:` in the input selects IPv6 parsing, otherwise IPv4; malformed
    /// input containing a stray colon is rejected by the IPv6 syntax parser,
    /// never retried as IPv4. An absent `/<prefix>` suffix defaults to the
    /// family's full width.
    ///
    /// With `is_network` set, the input is a CIDR network block: bits beyond
    /// the prefix length must be zero or the value is rejected with
    /// [`Error::CidrFormat`] — it is never silently masked. Network input may
    /// abbreviate trailing zero octets of an IPv4 quad (`10/8`,
    /// `192.0.2/24`); host input requires all four.
    pub fn parse(src: &str, is_network: bool) -> Result<Address, Error> {
        let src = src.trim();
        let family = if src.contains(':') {
            Family::Ipv6
        } else {
            Family::Ipv4
        };

        let (addr_part, suffix) = match src.split_once('/') {
            Some((addr, mask)) => (addr, Some(mask)),
            None => (src, None),
        };

        let bits = match suffix {
            None => family.max_bits(),
            Some(mask) => {
                if mask.is_empty() || !mask.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(bad_syntax(src));
                }
                mask.parse::<u8>().map_err(|_| bad_syntax(src))?
            }
        };
        if bits > family.max_bits() {
            return Err(bad_syntax(src));
        }

        let mut octets = [0u8; 16];
        match family {
            Family::Ipv4 => {
                let addr = parse_ipv4_quad(addr_part, is_network).ok_or_else(|| bad_syntax(src))?;
                octets[..4].copy_from_slice(&addr.octets());
            }
            Family::Ipv6 => {
                let addr: Ipv6Addr = addr_part.parse().map_err(|_| bad_syntax(src))?;
                octets = addr.octets();
            }
        }

        if is_network && !host_bits_zero(&octets, bits, family) {
            log::debug!("rejecting network block '{}': nonzero bits beyond /{}", src, bits);
            return Err(Error::CidrFormat {
                input: src.to_string(),
                bits,
            });
        }

        Ok(Address {
            family,
            bits,
            octets,
            network: is_network,
        })
    }

    /// Parse a host address (`parse` with host semantics).
    pub fn host(src: &str) -> Result<Address, Error> {
        Address::parse(src, false)
    }

    /// Parse a CIDR network block (`parse` with network semantics).
    pub fn network(src: &str) -> Result<Address, Error> {
        Address::parse(src, true)
    }

    /// Construct from already-decoded fields.
    ///
    /// Validates the same invariants as [`Address::parse`]: the prefix
    /// length must fit the family, and a network block must have zero host
    /// bits.
    pub fn new(addr: IpAddr, bits: u8, is_network: bool) -> Result<Address, Error> {
        let (family, octets) = match addr {
            IpAddr::V4(v4) => {
                let mut octets = [0u8; 16];
                octets[..4].copy_from_slice(&v4.octets());
                (Family::Ipv4, octets)
            }
            IpAddr::V6(v6) => (Family::Ipv6, v6.octets()),
        };
        if bits > family.max_bits() {
            return Err(Error::AddressFormat {
                input: format!("{}/{}", addr, bits),
            });
        }
        if is_network && !host_bits_zero(&octets, bits, family) {
            return Err(Error::CidrFormat {
                input: format!("{}/{}", addr, bits),
                bits,
            });
        }
        Ok(Address {
            family,
            bits,
            octets,
            network: is_network,
        })
    }

    /// The address family.
    pub fn family(&self) -> Family {
        self.family
    }

    /// The prefix length in bits.
    pub fn prefix_len(&self) -> u8 {
        self.bits
    }

    /// Whether this value is a network block rather than a host address.
    pub fn is_network(&self) -> bool {
        self.network
    }

    /// The address bytes, truncated to the family's width.
    pub fn octets(&self) -> &[u8] {
        &self.octets[..self.family.addr_size()]
    }

    /// The address as a standard library [`IpAddr`].
    pub fn ip(&self) -> IpAddr {
        match self.family {
            Family::Ipv4 => IpAddr::V4(Ipv4Addr::new(
                self.octets[0],
                self.octets[1],
                self.octets[2],
                self.octets[3],
            )),
            Family::Ipv6 => IpAddr::V6(Ipv6Addr::from(self.octets)),
        }
    }

    /// Canonical text for this address.
    ///
    /// The `/<prefix>` suffix is written whenever the prefix length is not
    /// the family's full width; with `as_network` set it is written even at
    /// full width, so a network block's text always carries a mask length.
    ///
    /// # Examples
    /// ```
    /// use netcidr::Address;
    ///
    /// let host = Address::host("192.0.2.1").unwrap();
    /// assert_eq!(host.format(false).unwrap(), "192.0.2.1");
    /// assert_eq!(host.format(true).unwrap(), "192.0.2.1/32");
    /// ```
    pub fn format(&self, as_network: bool) -> Result<String, Error> {
        let mut out = String::new();
        out.try_reserve(MAX_TEXT_LEN)?;
        self.write_text(&mut out, as_network)
            .map_err(|_| Error::Encoding)?;
        Ok(out)
    }

    fn write_text<W: fmt::Write>(&self, out: &mut W, as_network: bool) -> fmt::Result {
        match self.family {
            Family::Ipv4 => write!(
                out,
                "{}",
                Ipv4Addr::new(self.octets[0], self.octets[1], self.octets[2], self.octets[3])
            )?,
            Family::Ipv6 => write!(out, "{}", Ipv6Addr::from(self.octets))?,
        }
        if as_network || self.bits != self.family.max_bits() {
            write!(out, "/{}", self.bits)?;
        }
        Ok(())
    }
}

/// Decode a dotted-quad address part.
///
/// Network input may leave off trailing zero octets, as the classic
/// `inet_net_pton` decoder does: `10/8` means `10.0.0.0/8` and `192.0.2/24`
/// means `192.0.2.0/24`. Short forms are padded with zero octets and handed
/// to the standard parser, which still rejects bad groups. Host input gets
/// no abbreviation and must spell out all four octets.
fn parse_ipv4_quad(addr_part: &str, allow_abbreviated: bool) -> Option<Ipv4Addr> {
    let groups = addr_part.split('.').count();
    if groups == 4 || !allow_abbreviated {
        return addr_part.parse().ok();
    }
    if groups > 4 {
        return None;
    }
    let mut padded = String::with_capacity(addr_part.len() + 2 * (4 - groups));
    padded.push_str(addr_part);
    for _ in groups..4 {
        padded.push_str(".0");
    }
    padded.parse().ok()
}

fn bad_syntax(src: &str) -> Error {
    log::debug!("rejecting address '{}': does not decode", src);
    Error::AddressFormat {
        input: src.to_string(),
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_text(f, self.network)
    }
}

impl FromStr for Address {
    type Err = Error;

    /// Parses with host semantics; use [`Address::network`] for CIDR input.
    fn from_str(src: &str) -> Result<Address, Error> {
        Address::host(src)
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Address {
        let mut octets = [0u8; 16];
        octets[..4].copy_from_slice(&addr.octets());
        Address {
            family: Family::Ipv4,
            bits: 32,
            octets,
            network: false,
        }
    }
}

impl From<Ipv6Addr> for Address {
    fn from(addr: Ipv6Addr) -> Address {
        Address {
            family: Family::Ipv6,
            bits: 128,
            octets: addr.octets(),
            network: false,
        }
    }
}

impl From<IpAddr> for Address {
    fn from(addr: IpAddr) -> Address {
        match addr {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        // Suffixed text is assumed to be a network block; when the host bits
        // are nonzero it can only be a host value with an explicit mask.
        let parsed = if s.contains('/') {
            Address::network(&s).or_else(|_| Address::host(&s))
        } else {
            Address::host(&s)
        };
        parsed.map_err(de::Error::custom)
    }
}
