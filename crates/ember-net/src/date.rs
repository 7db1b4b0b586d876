//! HTTP timestamp helpers.

use std::time::UNIX_EPOCH;

/// Parses an RFC 7231 HTTP-date (IMF-fixdate, RFC 850, or asctime form)
/// into seconds since the Unix epoch. Unparseable input is reported as
/// absent, never as an error.
pub fn parse_http_timestamp(value: &str) -> Option<f64> {
    let parsed = httpdate::parse_http_date(value.trim()).ok()?;
    let since_epoch = parsed.duration_since(UNIX_EPOCH).ok()?;
    Some(since_epoch.as_secs_f64())
}

/// Parses an `Age` header (non-negative delta seconds). Absent or garbage
/// values count as zero.
pub fn parse_age_seconds(value: &str) -> f64 {
    value
        .trim()
        .parse::<u64>()
        .map(|seconds| seconds as f64)
        .unwrap_or(0.0)
}
