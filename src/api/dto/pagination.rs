//! Pagination query parameters for the list endpoint.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

/// `skip`/`limit` query parameters.
///
/// Uses `serde_with` to parse the values from query strings as integers.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub skip: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<u32>,
}

impl ListParams {
    /// Validates the parameters and converts them to SQL offset/limit.
    ///
    /// # Defaults
    ///
    /// - `skip`: 0
    /// - `limit`: 100
    ///
    /// # Validation
    ///
    /// `limit` must be between 1 and 1000.
    pub fn validate_and_get_skip_limit(&self) -> Result<(i64, i64), String> {
        let skip = self.skip.unwrap_or(0);
        let limit = self.limit.unwrap_or(100);

        if !(1..=1000).contains(&limit) {
            return Err("limit must be between 1 and 1000".to_string());
        }

        Ok((skip as i64, limit as i64))
    }
}
