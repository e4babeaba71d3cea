//! The validation pipeline: stage ordering, DNS resolution, and probe
//! dispatch.

use crate::config::Config;
use crate::validation::probe::LivenessProbe;
use crate::validation::{ValidatedUrl, ValidationError, hostname};
use std::time::Duration;
use url::{Host, Url};

/// Maximum accepted URL length after scheme normalization.
const MAX_URL_LENGTH: usize = 2048;

/// Tunables for the validation pipeline, derived from [`Config`] at startup.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    pub max_url_length: usize,
    /// Require hostnames to resolve. Off only in hermetic test environments.
    pub dns_check: bool,
    pub dns_timeout: Duration,
    /// Probe target URLs with an HTTP request before accepting them.
    pub liveness_check: bool,
    pub liveness_timeout: Duration,
    pub accept_invalid_certs: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_url_length: MAX_URL_LENGTH,
            dns_check: true,
            dns_timeout: Duration::from_secs(3),
            liveness_check: false,
            liveness_timeout: Duration::from_secs(5),
            accept_invalid_certs: false,
        }
    }
}

impl ValidatorConfig {
    /// Derives validator settings from the service configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_url_length: MAX_URL_LENGTH,
            dns_check: config.dns_check,
            dns_timeout: Duration::from_secs(config.dns_timeout),
            liveness_check: config.liveness_check,
            liveness_timeout: Duration::from_secs(config.liveness_timeout),
            accept_invalid_certs: config.accept_invalid_certs,
        }
    }
}

/// Validates raw user input into an acceptable target URL.
///
/// Construct once at startup and share; the probe client keeps a connection
/// pool. Validation has no side effects on service state, so a cancelled
/// call (client disconnect) cannot corrupt anything.
pub struct UrlValidator {
    config: ValidatorConfig,
    probe: Option<LivenessProbe>,
}

impl UrlValidator {
    /// Builds the validator, constructing the probe client only when the
    /// liveness stage is enabled.
    pub fn new(config: ValidatorConfig) -> anyhow::Result<Self> {
        let probe = if config.liveness_check {
            Some(LivenessProbe::new(
                config.liveness_timeout,
                config.accept_invalid_certs,
            )?)
        } else {
            None
        };

        Ok(Self { config, probe })
    }

    /// Runs the full pipeline over `raw`.
    ///
    /// # Errors
    ///
    /// Returns the first failing stage's [`ValidationError`]; its `Display`
    /// form is the reason surfaced to the caller.
    pub async fn validate(&self, raw: &str) -> Result<ValidatedUrl, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }

        let normalized = ensure_scheme(trimmed);

        if normalized.len() > self.config.max_url_length {
            return Err(ValidationError::TooLong {
                len: normalized.len(),
                max: self.config.max_url_length,
            });
        }

        let parsed = match Url::parse(&normalized) {
            Ok(url) => url,
            Err(e) => {
                // When the host itself is what broke parsing, a host-level
                // reason ("missing domain structure", "invalid label") is far
                // more useful than the parser's message.
                hostname::check_host_str(raw_host_of(&normalized))?;
                return Err(ValidationError::Malformed(e.to_string()));
            }
        };

        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(ValidationError::Malformed(format!(
                "unsupported scheme '{other}'"
            ))),
        }

        match parsed.host() {
            Some(Host::Domain(domain)) => {
                let domain = domain.to_ascii_lowercase();
                hostname::check_domain(&domain)?;

                if self.config.dns_check {
                    self.resolve(&domain).await?;
                }
            }
            Some(Host::Ipv4(ip)) => hostname::check_ipv4(ip, &ip.to_string())?,
            Some(Host::Ipv6(ip)) => hostname::check_ipv6(ip, &ip.to_string())?,
            None => {
                return Err(ValidationError::Malformed("URL has no host".to_string()));
            }
        }

        let mut warning = None;
        if let Some(probe) = &self.probe {
            warning = probe.check(&normalized).await?;
        }

        Ok(ValidatedUrl {
            url: normalized,
            warning,
        })
    }

    /// Resolves `host` via the system resolver (covers both A and AAAA
    /// lookups) under the configured timeout.
    async fn resolve(&self, host: &str) -> Result<(), ValidationError> {
        let lookup = tokio::net::lookup_host((host, 443u16));

        match tokio::time::timeout(self.config.dns_timeout, lookup).await {
            Ok(Ok(mut addrs)) => {
                if addrs.next().is_some() {
                    Ok(())
                } else {
                    Err(ValidationError::Unresolvable(host.to_string()))
                }
            }
            _ => Err(ValidationError::Unresolvable(host.to_string())),
        }
    }
}

/// Applies the canonical scheme rule: input without an `http://`/`https://`
/// prefix gets `https://` prepended.
fn ensure_scheme(input: &str) -> String {
    let head: String = input
        .chars()
        .take(8)
        .collect::<String>()
        .to_ascii_lowercase();

    if head.starts_with("http://") || head.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{input}")
    }
}

/// Slices the authority's host out of a URL string without parsing it.
/// Only used to improve rejection reasons when `Url::parse` already failed.
fn raw_host_of(url: &str) -> &str {
    let after_scheme = url
        .find("://")
        .map(|i| &url[i + 3..])
        .unwrap_or(url);

    let end = after_scheme
        .find(['/', '?', '#'])
        .unwrap_or(after_scheme.len());
    let authority = &after_scheme[..end];

    // Drop userinfo and any trailing :port.
    let host = authority
        .rfind('@')
        .map(|i| &authority[i + 1..])
        .unwrap_or(authority);

    if host.starts_with('[') {
        return host;
    }
    match host.rfind(':') {
        Some(i) if host[i + 1..].chars().all(|c| c.is_ascii_digit()) => &host[..i],
        _ => host,
    }
}
