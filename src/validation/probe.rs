//! Outbound liveness probe for target URLs.
//!
//! The probe is the only validation stage with network side costs on the
//! target, so it is as light as possible: a HEAD request, falling back to
//! GET only when the server rejects HEAD outright.

use crate::validation::ValidationError;
use reqwest::StatusCode;
use std::time::Duration;

/// User-Agent sent with probe requests. Some sites answer bots differently,
/// so the probe identifies as an ordinary browser.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Maximum redirects followed before the target counts as unreachable.
const MAX_REDIRECTS: usize = 10;

/// Probes target URLs with a short-timeout HTTP request.
pub struct LivenessProbe {
    client: reqwest::Client,
}

impl LivenessProbe {
    /// Builds the probe client.
    ///
    /// `accept_invalid_certs` relaxes TLS verification; it exists for
    /// non-production environments with interception proxies or self-signed
    /// staging targets.
    pub fn new(timeout: Duration, accept_invalid_certs: bool) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()?;

        Ok(Self { client })
    }

    /// Checks that `url` answers a lightweight request.
    ///
    /// # Outcomes
    ///
    /// - status below 400 → reachable, `Ok(None)`
    /// - status 405 on HEAD → retried once as GET
    /// - status 400+ → [`ValidationError::TargetUnreachable`]
    /// - network timeout → soft pass: `Ok(Some(warning))`. A slow but
    ///   legitimate site should not be blocked from being shortened.
    /// - other transport errors → [`ValidationError::ProbeFailed`]
    pub async fn check(&self, url: &str) -> Result<Option<String>, ValidationError> {
        let response = match self.client.head(url).send().await {
            Ok(r) if r.status() == StatusCode::METHOD_NOT_ALLOWED => {
                self.client.get(url).send().await
            }
            other => other,
        };

        match response {
            Ok(r) if r.status().as_u16() < 400 => Ok(None),
            Ok(r) => Err(ValidationError::TargetUnreachable(r.status().as_u16())),
            Err(e) if e.is_timeout() => {
                tracing::warn!(url, "liveness probe timed out; accepting URL anyway");
                Ok(Some(
                    "target did not respond before the probe timeout; \
                     the URL was accepted without liveness confirmation"
                        .to_string(),
                ))
            }
            Err(e) => Err(ValidationError::ProbeFailed(probe_error_message(e))),
        }
    }
}

/// Flattens a reqwest error into a message without leaking the full URL chain.
fn probe_error_message(e: reqwest::Error) -> String {
    if e.is_connect() {
        "connection refused or unreachable".to_string()
    } else if e.is_redirect() {
        "too many redirects".to_string()
    } else {
        e.without_url().to_string()
    }
}
