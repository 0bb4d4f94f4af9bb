//! HTTP utilities for stats.nba.com communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, ORIGIN, REFERER, USER_AGENT};

/// Browser-like user agent; the stats provider drops requests without one.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Build the header set the stats provider expects on every request.
pub fn default_header_map(user_agent: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
    h.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    h.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    h.insert(
        HeaderName::from_static("x-nba-stats-origin"),
        HeaderValue::from_static("stats"),
    );
    h.insert(
        HeaderName::from_static("x-nba-stats-token"),
        HeaderValue::from_static("true"),
    );
    h.insert(USER_AGENT, HeaderValue::from_str(user_agent)?);
    Ok(h)
}
