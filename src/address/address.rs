use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::str::FromStr;

use super::errors::AddressError;

/// Tagged network endpoint consumed by the address-typed attribute appenders.
///
/// Exactly one variant is ever active, so reads cannot observe an address
/// through the wrong family. Both variants carry the port in host byte order.
/// The value is plain data: freely copyable, comparable componentwise, and
/// embeddable in larger records without allocation concerns.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StunAddress {
    /// IPv4 endpoint. The address is kept in host byte order.
    V4 {
        /// 32-bit address, host byte order
        addr: u32,
        /// Port, host byte order
        port: u16,
    },
    /// IPv6 endpoint. The address bytes are kept in network byte order.
    V6 {
        /// 128-bit address, network byte order
        addr: [u8; 16],
        /// Port, host byte order
        port: u16,
    },
}

impl StunAddress {
    /// Creates an IPv4 endpoint from a host-order address value.
    pub fn from_ipv4(addr: u32, port: u16) -> Self {
        StunAddress::V4 { addr, port }
    }

    /// Creates an IPv6 endpoint from its 16 network-order address bytes.
    pub fn from_ipv6(addr: [u8; 16], port: u16) -> Self {
        StunAddress::V6 { addr, port }
    }

    /// Parses a dotted-quad string into an IPv4 endpoint.
    ///
    /// Anything other than a plain dotted quad is rejected; no partially
    /// initialized address is ever produced.
    pub fn from_ipv4_str(value: &str, port: u16) -> Result<Self, AddressError> {
        let parsed = Ipv4Addr::from_str(value).map_err(|_| AddressError::InvalidIpv4String {
            value: value.to_string(),
        })?;

        Ok(StunAddress::V4 {
            addr: u32::from(parsed),
            port,
        })
    }

    /// Returns the port in host byte order.
    pub fn port(&self) -> u16 {
        match *self {
            StunAddress::V4 { port, .. } => port,
            StunAddress::V6 { port, .. } => port,
        }
    }

    /// Whether the active variant is IPv4.
    pub fn is_ipv4(&self) -> bool {
        matches!(self, StunAddress::V4 { .. })
    }

    /// Address family byte used on the wire (1 = IPv4, 2 = IPv6).
    pub(crate) fn family(&self) -> u8 {
        match self {
            StunAddress::V4 { .. } => 0x01,
            StunAddress::V6 { .. } => 0x02,
        }
    }

    /// Whether the address falls into one of the [RFC3330](https://tools.ietf.org/html/rfc3330)
    /// private IPv4 ranges: `10/8`, `172.16/12`, `192.168/16` or `127/8`.
    ///
    /// Only defined for IPv4; calling it on an IPv6 value is a programmer
    /// error and panics.
    pub fn is_private(&self) -> bool {
        match *self {
            StunAddress::V4 { addr, .. } => {
                (addr >> 24) == 10
                    || (addr >> 20) == 0xac1
                    || (addr >> 16) == 0xc0a8
                    || (addr >> 24) == 127
            }
            StunAddress::V6 { .. } => panic!("is_private is only defined for IPv4 addresses"),
        }
    }
}

impl From<SocketAddr> for StunAddress {
    fn from(socket_addr: SocketAddr) -> Self {
        match socket_addr {
            SocketAddr::V4(v4) => StunAddress::V4 {
                addr: u32::from(*v4.ip()),
                port: v4.port(),
            },
            SocketAddr::V6(v6) => StunAddress::V6 {
                addr: v6.ip().octets(),
                port: v6.port(),
            },
        }
    }
}

impl From<StunAddress> for SocketAddr {
    fn from(address: StunAddress) -> Self {
        match address {
            StunAddress::V4 { addr, port } => {
                SocketAddr::new(IpAddr::V4(Ipv4Addr::from(addr)), port)
            }
            StunAddress::V6 { addr, port } => {
                SocketAddr::new(IpAddr::V6(Ipv6Addr::from(addr)), port)
            }
        }
    }
}

impl fmt::Display for StunAddress {
    /// Canonical textual form of the address, without the port.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            StunAddress::V4 { addr, .. } => write!(f, "{}", Ipv4Addr::from(addr)),
            StunAddress::V6 { addr, .. } => write!(f, "{}", Ipv6Addr::from(addr)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use super::StunAddress;

    #[test]
    fn parses_dotted_quads() {
        let address = StunAddress::from_ipv4_str("192.0.2.1", 3478).unwrap();

        assert_eq!(address, StunAddress::from_ipv4(0xc000_0201, 3478));
        assert_eq!(address.to_string(), "192.0.2.1");
    }

    #[test]
    fn rejects_bad_ipv4_strings() {
        assert!(StunAddress::from_ipv4_str("256.0.0.1", 0).is_err());
        assert!(StunAddress::from_ipv4_str("::1", 0).is_err());
        assert!(StunAddress::from_ipv4_str("host.example.com", 0).is_err());
    }

    #[test]
    fn socket_addr_round_trip() {
        let v4 = StunAddress::from_ipv4_str("203.0.113.9", 9000).unwrap();
        assert_eq!(StunAddress::from(SocketAddr::from(v4)), v4);

        let v6_sock: SocketAddr = "[2001:db8::1]:443".parse().unwrap();
        let v6 = StunAddress::from(v6_sock);
        assert_eq!(SocketAddr::from(v6), v6_sock);
        assert_eq!(v6.to_string(), "2001:db8::1");
        assert_eq!(v6.port(), 443);
    }

    #[test]
    fn private_ranges() {
        for private in &["10.0.0.1", "172.16.0.1", "192.168.1.1", "127.0.0.1"] {
            assert!(
                StunAddress::from_ipv4_str(private, 0).unwrap().is_private(),
                "{} should be private",
                private
            );
        }

        for public in &["8.8.8.8", "172.32.0.1", "192.169.0.1"] {
            assert!(
                !StunAddress::from_ipv4_str(public, 0).unwrap().is_private(),
                "{} should be public",
                public
            );
        }
    }

    #[test]
    #[should_panic]
    fn is_private_panics_on_ipv6() {
        StunAddress::from_ipv6([0u8; 16], 0).is_private();
    }
}
