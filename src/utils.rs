//! Utility functions and helpers

use crate::error::{GatewayError, Result};
use url::Url;

/// URL validation and joining utilities
pub struct UrlUtils;

impl UrlUtils {
    /// Validate and normalize a base URL
    pub fn validate_base_url(input: &str) -> Result<Url> {
        // Add https:// if no scheme is provided
        let url_str = if input.contains("://") {
            input.to_string()
        } else {
            format!("https://{}", input)
        };

        Url::parse(&url_str)
            .map_err(|e| GatewayError::InvalidUrl(format!("Invalid base URL '{}': {}", input, e)))
    }

    /// Resolve a request path against a base URL.
    ///
    /// Paths are treated as relative to the base regardless of a leading
    /// slash, so a base of `https://host/api` keeps its prefix.
    pub fn join(base: &Url, path: &str) -> Result<Url> {
        let mut url = base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                GatewayError::InvalidUrl(format!("Base URL '{}' cannot have a path", base))
            })?;
            segments.pop_if_empty();
            for segment in path.split('/').filter(|s| !s.is_empty()) {
                segments.push(segment);
            }
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests;
