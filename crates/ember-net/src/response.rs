//! Response record with one-shot cache-expiration computation.

use crate::date::parse_age_seconds;
use crate::date::parse_http_timestamp;
use crate::freshness::CacheControl;
use crate::freshness::FreshnessInputs;
use crate::freshness::effective_expiration;
use crate::freshness::pragma_requests_no_cache;
use crate::http::Header;
use crate::http::HttpStatusCode;
use crate::http::find_header;
use crate::url::ResourceUrl;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

/// Metadata of one received response, fixed at construction.
///
/// The effective expiration is computed exactly once, from a single clock
/// sample taken when the record is built, and never recomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceResponse {
    url: ResourceUrl,
    status: HttpStatusCode,
    headers: Vec<Header>,
    mime_type: Option<String>,
    text_encoding: Option<String>,
    content_length: Option<u64>,
    expiration: f64,
}

impl ResourceResponse {
    /// Builds the record, sampling the wall clock once for the expiration
    /// computation.
    pub fn new(url: ResourceUrl, status: HttpStatusCode, headers: Vec<Header>) -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs_f64())
            .unwrap_or_default();
        Self::from_parts_at(url, status, headers, now)
    }

    /// Builds the record against a caller-supplied clock sample.
    pub fn from_parts_at(
        url: ResourceUrl,
        status: HttpStatusCode,
        headers: Vec<Header>,
        now: f64,
    ) -> Self {
        let (mime_type, text_encoding) = split_content_type(find_header(&headers, "content-type"));
        let content_length =
            find_header(&headers, "content-length").and_then(|value| value.trim().parse().ok());

        let inputs = FreshnessInputs {
            date: find_header(&headers, "date").and_then(parse_http_timestamp),
            age: find_header(&headers, "age").map_or(0.0, parse_age_seconds),
            expires: find_header(&headers, "expires").and_then(parse_http_timestamp),
            cache_control: find_header(&headers, "cache-control")
                .map(CacheControl::parse)
                .unwrap_or_default(),
            pragma_no_cache: find_header(&headers, "pragma")
                .is_some_and(pragma_requests_no_cache),
        };
        let expiration = effective_expiration(now, &inputs);

        Self {
            url,
            status,
            headers,
            mime_type,
            text_encoding,
            content_length,
            expiration,
        }
    }

    pub fn url(&self) -> &ResourceUrl {
        &self.url
    }

    pub fn status(&self) -> HttpStatusCode {
        self.status
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    pub fn text_encoding(&self) -> Option<&str> {
        self.text_encoding.as_deref()
    }

    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    /// Effective expiration in seconds since the Unix epoch. Always finite.
    pub fn expiration(&self) -> f64 {
        self.expiration
    }

    pub fn is_fresh_at(&self, now: f64) -> bool {
        now < self.expiration
    }
}

/// Splits a `Content-Type` value into a lowercased media type and the
/// `charset` parameter, if any.
fn split_content_type(value: Option<&str>) -> (Option<String>, Option<String>) {
    let Some(value) = value else {
        return (None, None);
    };

    let mut sections = value.split(';');
    let media_type = sections.next().unwrap_or("").trim();
    let mime_type = if media_type.is_empty() {
        None
    } else {
        Some(media_type.to_ascii_lowercase())
    };

    let mut text_encoding = None;
    for parameter in sections {
        if let Some((name, raw)) = parameter.split_once('=') {
            if name.trim().eq_ignore_ascii_case("charset") {
                let cleaned = raw.trim().trim_matches('"').trim();
                if !cleaned.is_empty() {
                    text_encoding = Some(cleaned.to_owned());
                }
                break;
            }
        }
    }

    (mime_type, text_encoding)
}
