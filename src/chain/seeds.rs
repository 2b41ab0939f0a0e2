//! Seed node lists
//!
//! Hardcoded bootstrap peers for initial discovery. DNS seeds are resolved
//! by the peer discovery layer at connection time; the fixed lists are the
//! compiled-in fallback when DNS is unavailable.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

/// DNS seed hostnames for the production network
pub const MAIN_DNS_SEEDS: &[&str] = &["dnsseed.manga-core.com", "dnsseed.fthservice.com"];

/// DNS seed hostnames for the public test network
pub const TEST_DNS_SEEDS: &[&str] = &["dnsseed.manga-core.com", "dnsseed.fthservice.com"];

const MAIN_PORT: u16 = 18730;
const TEST_PORT: u16 = 23730;

/// DNS seed hostnames for the production network, owned
pub fn main_dns_seeds() -> Vec<String> {
    MAIN_DNS_SEEDS.iter().map(|s| s.to_string()).collect()
}

/// DNS seed hostnames for the public test network, owned
pub fn test_dns_seeds() -> Vec<String> {
    TEST_DNS_SEEDS.iter().map(|s| s.to_string()).collect()
}

/// Fixed fallback seeds for the production network
pub fn main_fixed_seeds() -> Vec<SocketAddr> {
    vec![
        sock4([160, 16, 147, 96], MAIN_PORT),
        sock4([133, 242, 132, 212], MAIN_PORT),
        sock4([219, 94, 253, 115], MAIN_PORT),
        sock4([45, 77, 20, 164], MAIN_PORT),
        sock6([0x2401, 0x2500, 0x203, 0x300b, 0x153, 0x120, 0x147, 0x96], MAIN_PORT),
        sock6([0x2001, 0xe42, 0x102, 0x1811, 0x133, 0x242, 0x132, 0x212], MAIN_PORT),
    ]
}

/// Fixed fallback seeds for the public test network
pub fn test_fixed_seeds() -> Vec<SocketAddr> {
    vec![
        sock4([160, 16, 147, 96], TEST_PORT),
        sock6([0x2401, 0x2500, 0x203, 0x300b, 0x153, 0x120, 0x147, 0x96], TEST_PORT),
    ]
}

fn sock4(octets: [u8; 4], port: u16) -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::from(octets)), port)
}

fn sock6(segments: [u16; 8], port: u16) -> SocketAddr {
    SocketAddr::new(IpAddr::V6(Ipv6Addr::from(segments)), port)
}
