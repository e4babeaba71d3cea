//! Multi-stage validation of target URLs.
//!
//! Stages run in order and short-circuit on the first failure:
//!
//! 1. emptiness check
//! 2. scheme normalization (`https://` prepended when absent)
//! 3. length bound (2048 characters)
//! 4. syntactic URL check ([`url::Url`])
//! 5. hostname structure: labels, TLD allow-list ([`tlds`])
//! 6. blocklist: loopback/private prefixes and IP octet inspection ([`hostname`])
//! 7. DNS resolution under a timeout
//! 8. optional liveness probe ([`probe`])
//!
//! The rejection reason names the failing stage and is surfaced verbatim to
//! the caller.

pub mod hostname;
pub mod pipeline;
pub mod probe;
pub mod tlds;

pub use pipeline::{UrlValidator, ValidatorConfig};

/// Why a URL was rejected. The `Display` form is the user-facing reason.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("URL is too long: {len} characters (maximum is {max})")]
    TooLong { len: usize, max: usize },

    #[error("malformed URL: {0}")]
    Malformed(String),

    #[error("'{0}' is missing a domain structure; expected something like 'example.com'")]
    MissingDomainStructure(String),

    #[error("'{0}' is not a valid domain name label")]
    InvalidLabel(String),

    #[error("'.{0}' is not a recognized top-level domain")]
    UnknownTld(String),

    #[error("domain name '{0}' is too short to be registrable")]
    DomainTooShort(String),

    #[error("'{0}' is a disallowed host (loopback or private network)")]
    BlockedHost(String),

    #[error("'{0}' is a private or reserved network address and is not allowed")]
    PrivateAddress(String),

    #[error("hostname '{0}' does not resolve to any address")]
    Unresolvable(String),

    #[error("target URL responded with status {0}")]
    TargetUnreachable(u16),

    #[error("could not connect to target URL: {0}")]
    ProbeFailed(String),
}

/// A URL that passed every enabled stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUrl {
    /// The normalized URL: the trimmed input with the scheme rule applied.
    /// Never re-serialized, so accepted input round-trips byte-identically.
    pub url: String,

    /// Set when the liveness probe timed out and the URL was accepted on the
    /// availability-over-strictness rule.
    pub warning: Option<String>,
}
