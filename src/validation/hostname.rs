//! Hostname acceptance rules: blocklist, private-range inspection, and
//! domain structure.
//!
//! Two complementary mechanisms reject internal targets:
//!
//! 1. a string-prefix blocklist over the hostname as written, and
//! 2. numeric octet inspection for literal IP hosts, which catches private
//!    addresses in any spelling the prefix list would miss.
//!
//! The blocked/private reason always wins over a structural reason so that a
//! loopback target is named as such rather than as a bad domain name.

use crate::validation::ValidationError;
use crate::validation::tlds::{SHORT_SLD_EXCEPTIONS, is_known_tld};
use regex::Regex;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

/// RFC-1035-style label: alphanumeric with internal hyphens.
static LABEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]([a-z0-9-]*[a-z0-9])?$").unwrap());

/// Hostname prefixes that are never acceptable redirect targets.
const BLOCKED_PREFIXES: &[&str] = &[
    "localhost",
    "127.0.0.1",
    "0.0.0.0",
    "::1",
    "192.168.",
    "10.",
    "172.16.",
    "172.17.",
    "172.18.",
    "172.19.",
    "172.20.",
    "172.21.",
    "172.22.",
    "172.23.",
    "172.24.",
    "172.25.",
    "172.26.",
    "172.27.",
    "172.28.",
    "172.29.",
    "172.30.",
    "172.31.",
];

/// Checks a host string of unknown shape: IPv6 literal, IPv4 literal, or
/// domain name.
pub fn check_host_str(host: &str) -> Result<(), ValidationError> {
    let host = host.trim().to_ascii_lowercase();

    if host.is_empty() {
        return Err(ValidationError::MissingDomainStructure(host));
    }

    if let Some(inner) = host.strip_prefix('[') {
        let inner = inner.strip_suffix(']').unwrap_or(inner);
        return match inner.parse::<Ipv6Addr>() {
            Ok(ip) => check_ipv6(ip, inner),
            Err(_) => Err(ValidationError::InvalidLabel(host)),
        };
    }

    if let Ok(ip) = host.parse::<Ipv4Addr>() {
        return check_ipv4(ip, &host);
    }
    if let Ok(ip) = host.parse::<Ipv6Addr>() {
        return check_ipv6(ip, &host);
    }

    check_domain(&host)
}

/// Rejects literal IPv4 hosts in loopback, private, or otherwise reserved
/// ranges by inspecting the parsed octets.
pub fn check_ipv4(ip: Ipv4Addr, display: &str) -> Result<(), ValidationError> {
    if ip.is_loopback()
        || ip.is_unspecified()
        || ip.is_private()
        || ip.is_link_local()
        || ip.is_broadcast()
        || ip.octets()[0] == 0
    {
        return Err(ValidationError::PrivateAddress(display.to_string()));
    }

    Ok(())
}

/// Rejects loopback and unspecified literal IPv6 hosts.
pub fn check_ipv6(ip: Ipv6Addr, display: &str) -> Result<(), ValidationError> {
    if ip.is_loopback() || ip.is_unspecified() {
        return Err(ValidationError::PrivateAddress(display.to_string()));
    }

    Ok(())
}

/// Checks a hostname-shaped host (already lowercased): prefix blocklist,
/// then label structure, then the TLD allow-list.
pub fn check_domain(host: &str) -> Result<(), ValidationError> {
    for prefix in BLOCKED_PREFIXES {
        if host.starts_with(prefix) {
            return Err(ValidationError::BlockedHost(host.to_string()));
        }
    }

    if !host.contains('.') {
        return Err(ValidationError::MissingDomainStructure(host.to_string()));
    }

    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return Err(ValidationError::MissingDomainStructure(host.to_string()));
    }

    for label in &labels {
        if !LABEL_REGEX.is_match(label) {
            return Err(ValidationError::InvalidLabel((*label).to_string()));
        }
    }

    let tld = labels[labels.len() - 1];
    if !is_known_tld(tld) {
        return Err(ValidationError::UnknownTld(tld.to_string()));
    }

    let sld = labels[labels.len() - 2];
    if sld.len() < 2 && !SHORT_SLD_EXCEPTIONS.contains(&sld) {
        return Err(ValidationError::DomainTooShort(sld.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_regular_domains() {
        assert!(check_host_str("example.com").is_ok());
        assert!(check_host_str("www.google.com").is_ok());
        assert!(check_host_str("sub.domain.example.co").is_ok());
        assert!(check_host_str("a-b.example.org").is_ok());
    }

    #[test]
    fn test_lowercases_before_checking() {
        assert!(check_host_str("EXAMPLE.COM").is_ok());
    }

    #[test]
    fn test_rejects_localhost() {
        assert!(matches!(
            check_host_str("localhost"),
            Err(ValidationError::BlockedHost(_))
        ));
    }

    #[test]
    fn test_rejects_loopback_ipv4() {
        assert!(matches!(
            check_host_str("127.0.0.1"),
            Err(ValidationError::PrivateAddress(_))
        ));
    }

    #[test]
    fn test_rejects_private_ipv4_by_octets() {
        // Spellings the prefix list alone would miss are still caught.
        for host in ["10.0.0.1", "172.20.1.5", "192.168.1.1", "172.31.255.254"] {
            assert!(
                matches!(
                    check_host_str(host),
                    Err(ValidationError::PrivateAddress(_))
                ),
                "expected '{host}' to be rejected as private"
            );
        }
    }

    #[test]
    fn test_accepts_public_ipv4() {
        assert!(check_host_str("8.8.8.8").is_ok());
        assert!(check_host_str("93.184.216.34").is_ok());
    }

    #[test]
    fn test_rejects_ipv6_loopback() {
        assert!(matches!(
            check_host_str("[::1]"),
            Err(ValidationError::PrivateAddress(_))
        ));
    }

    #[test]
    fn test_rejects_hostname_with_private_prefix() {
        assert!(matches!(
            check_host_str("192.168.internal.example.com"),
            Err(ValidationError::BlockedHost(_))
        ));
    }

    #[test]
    fn test_rejects_dotless_hostname() {
        assert!(matches!(
            check_host_str("not a domain"),
            Err(ValidationError::MissingDomainStructure(_))
        ));
        assert!(matches!(
            check_host_str("intranet"),
            Err(ValidationError::MissingDomainStructure(_))
        ));
    }

    #[test]
    fn test_rejects_empty_labels() {
        assert!(matches!(
            check_host_str("example..com"),
            Err(ValidationError::MissingDomainStructure(_))
        ));
        assert!(matches!(
            check_host_str(".example.com"),
            Err(ValidationError::MissingDomainStructure(_))
        ));
    }

    #[test]
    fn test_rejects_bad_labels() {
        assert!(matches!(
            check_host_str("-bad.example.com"),
            Err(ValidationError::InvalidLabel(_))
        ));
        assert!(matches!(
            check_host_str("bad-.example.com"),
            Err(ValidationError::InvalidLabel(_))
        ));
        assert!(matches!(
            check_host_str("ba d.example.com"),
            Err(ValidationError::InvalidLabel(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_tld() {
        assert!(matches!(
            check_host_str("example.notatld"),
            Err(ValidationError::UnknownTld(_))
        ));
    }

    #[test]
    fn test_rejects_single_char_registrable_domain() {
        assert!(matches!(
            check_host_str("x.com"),
            Err(ValidationError::DomainTooShort(_))
        ));
    }

    #[test]
    fn test_allows_registry_suffix_exceptions() {
        assert!(check_host_str("example.co.uk").is_ok());
        assert!(check_host_str("university.ac.jp").is_ok());
        assert!(check_host_str("agency.go.kr").is_ok());
    }
}
