//! DTOs for the save endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::alias_generator::validate_custom_alias;
use crate::utils::url_normalizer::normalize_url;

/// Request to map a URL to an alias.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// The target URL (must be a valid absolute URL).
    #[validate(url(message = "url is not a valid URL"))]
    pub url: String,

    /// Optional caller-chosen alias. Absent or empty means "generate one".
    #[serde(default)]
    #[validate(custom(function = "validate_custom_alias"))]
    pub alias: Option<String>,
}

impl SaveRequest {
    pub fn new(url: impl Into<String>, alias: Option<String>) -> Self {
        Self {
            url: url.into(),
            alias,
        }
    }

    /// Drops an empty alias so that validation and generation treat it as
    /// absent, and replaces a parseable URL with its canonical form.
    pub fn normalized(mut self) -> Self {
        if self.alias.as_deref() == Some("") {
            self.alias = None;
        }
        if let Ok(url) = normalize_url(&self.url) {
            self.url = url;
        }
        self
    }
}

/// Response returned after a successful save.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub status: &'static str,
    pub alias: String,
}

impl SaveResponse {
    pub fn ok(alias: String) -> Self {
        Self {
            status: "OK",
            alias,
        }
    }
}
