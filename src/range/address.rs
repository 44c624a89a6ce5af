//! Address ranges and address parsing.
//!
//! An `AddressRange` stores its bounds as unsigned 128-bit magnitudes tagged
//! with the address family. IPv4 magnitudes occupy the low 32 bits.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use ipnetwork::IpNetwork;

use crate::error_handling::ResolveError;

/// Number of leading bits an IPv4-mapped IPv6 address spends on the `::ffff:` prefix.
const IPV4_MAPPED_PREFIX_BITS: u8 = 96;

/// Address family of a range or query.
///
/// The variant order (V4 before V6) is what `AddressRange`'s ordering uses as
/// its first key. It carries no meaning beyond being deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    /// IPv4 (4-byte addresses)
    V4,
    /// IPv6 (16-byte addresses)
    V6,
}

impl Family {
    /// Returns the family of a parsed address.
    pub fn of(addr: &IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => Family::V4,
            IpAddr::V6(_) => Family::V6,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::V4 => f.write_str("IPv4"),
            Family::V6 => f.write_str("IPv6"),
        }
    }
}

/// Parses an IP address literal.
///
/// IPv4-mapped IPv6 text (`::ffff:a.b.c.d`) is folded into the plain IPv4
/// address so it matches IPv4 ranges. Surrounding whitespace is not accepted.
///
/// # Errors
///
/// Returns `ResolveError::MalformedAddress` if `text` is not an IP literal.
pub fn parse_address(text: &str) -> Result<IpAddr, ResolveError> {
    text.parse::<IpAddr>()
        .map(|addr| addr.to_canonical())
        .map_err(|_| ResolveError::MalformedAddress(text.to_string()))
}

fn magnitude(addr: IpAddr) -> u128 {
    match addr {
        IpAddr::V4(v4) => u128::from(u32::from(v4)),
        IpAddr::V6(v6) => u128::from(v6),
    }
}

/// A contiguous, inclusive span of addresses in one family.
///
/// Ranges are totally ordered by `(family, start, end)`. The derived ordering
/// relies on the field declaration order below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AddressRange {
    family: Family,
    start: u128,
    end: u128,
}

impl AddressRange {
    /// Builds a range from explicit, inclusive bounds.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::MalformedRange` if the bounds belong to different
    /// families or if `start` is numerically greater than `end`.
    pub fn from_bounds(start: IpAddr, end: IpAddr) -> Result<Self, ResolveError> {
        let family = Family::of(&start);
        if family != Family::of(&end) {
            return Err(ResolveError::MalformedRange(format!(
                "{} and {} are in different address families",
                start, end
            )));
        }

        let (start_mag, end_mag) = (magnitude(start), magnitude(end));
        if start_mag > end_mag {
            return Err(ResolveError::MalformedRange(format!(
                "start {} is after end {}",
                start, end
            )));
        }

        Ok(Self {
            family,
            start: start_mag,
            end: end_mag,
        })
    }

    /// Builds a range covering exactly one address.
    pub fn single(addr: IpAddr) -> Self {
        let value = magnitude(addr);
        Self {
            family: Family::of(&addr),
            start: value,
            end: value,
        }
    }

    /// Builds a range from `address/prefixLength` notation.
    ///
    /// The host bits of `address` are cleared, so `10.1.2.3/8` covers
    /// `10.0.0.0` through `10.255.255.255`.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::MalformedRange` if the address or the prefix
    /// length does not parse, or if the prefix is wider than the family.
    pub fn from_cidr(address: &str, prefix: &str) -> Result<Self, ResolveError> {
        let malformed = |reason: String| {
            ResolveError::MalformedRange(format!("{}/{}: {}", address, prefix, reason))
        };

        let parsed: IpAddr = address
            .parse()
            .map_err(|_| malformed("invalid address".to_string()))?;
        let prefix_len: u8 = prefix
            .parse()
            .map_err(|_| malformed("invalid prefix length".to_string()))?;

        let (addr, prefix_len) = match parsed {
            IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
                Some(v4) => {
                    let folded = prefix_len.checked_sub(IPV4_MAPPED_PREFIX_BITS).ok_or_else(|| {
                        malformed("prefix shorter than the IPv4-mapped block".to_string())
                    })?;
                    (IpAddr::V4(v4), folded)
                }
                None => (parsed, prefix_len),
            },
            IpAddr::V4(_) => (parsed, prefix_len),
        };

        let network = IpNetwork::new(addr, prefix_len).map_err(|e| malformed(e.to_string()))?;
        Self::from_bounds(network.network(), network.broadcast())
    }

    /// Address family of both bounds.
    pub fn family(&self) -> Family {
        self.family
    }

    /// Numeric start of the range.
    pub fn start(&self) -> u128 {
        self.start
    }

    /// Numeric end of the range (inclusive).
    pub fn end(&self) -> u128 {
        self.end
    }

    /// First address in the range.
    pub fn first_address(&self) -> IpAddr {
        self.to_address(self.start)
    }

    /// Last address in the range.
    pub fn last_address(&self) -> IpAddr {
        self.to_address(self.end)
    }

    fn to_address(&self, value: u128) -> IpAddr {
        match self.family {
            // V4 magnitudes never exceed u32::MAX by construction
            Family::V4 => IpAddr::V4(Ipv4Addr::from(value as u32)),
            Family::V6 => IpAddr::V6(Ipv6Addr::from(value)),
        }
    }

    /// True if the two ranges share at least one address.
    ///
    /// Ranges of different families never overlap, even when their numeric
    /// bounds coincide.
    pub fn overlaps(&self, other: &AddressRange) -> bool {
        self.family == other.family && self.start <= other.end && other.start <= self.end
    }

    /// True if `addr` falls inside this range.
    pub fn contains(&self, addr: IpAddr) -> bool {
        self.overlaps(&AddressRange::single(addr))
    }

    /// The greatest possible key among ranges of `family` that start at `start`.
    ///
    /// Used as the probe for predecessor searches: every stored range whose
    /// start is `<= start` orders at or before it.
    pub(crate) fn upper_probe(family: Family, start: u128) -> Self {
        Self {
            family,
            start,
            end: u128::MAX,
        }
    }
}

impl FromStr for AddressRange {
    type Err = ResolveError;

    /// Parses CIDR notation, or a bare address as a single-host range.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((address, prefix)) => Self::from_cidr(address, prefix),
            None => parse_address(s).map(Self::single),
        }
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first_address(), self.last_address())
    }
}
