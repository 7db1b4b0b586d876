//! Cache-directive interpretation and effective-expiration computation.

use crate::fields::for_each_field_value;

/// Offset subtracted from "now" to mark a response as long expired
/// (10 years in seconds). Forces revalidation without using a sentinel.
pub const ALREADY_EXPIRED_OFFSET_SECS: f64 = 315_360_000.0;

const NO_CACHE_DIRECTIVE: &str = "no-cache";
const MAX_AGE_DIRECTIVE: &str = "max-age";

/// Folded view of a `Cache-Control` header value.
///
/// `max_age` is `Some` only when a `max-age=N` directive carried a parseable
/// integer; a present-but-unparseable value clears it. `no-cache` anywhere
/// in the list wins and stops the scan, so directives after it are never
/// examined.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CacheControl {
    pub no_cache: bool,
    pub max_age: Option<i64>,
}

impl CacheControl {
    pub fn parse(value: &str) -> Self {
        let mut state = Self::default();

        for_each_field_value(value, true, |directive| {
            if directive.eq_ignore_ascii_case(NO_CACHE_DIRECTIVE) {
                state.no_cache = true;
                return false;
            }

            if let Some(parsed) = parse_max_age_directive(directive) {
                // Last assignment wins, including a failed parse clearing an
                // earlier success.
                state.max_age = parsed;
            }

            true
        });

        state
    }
}

/// Returns true when a `Pragma` header value requests `no-cache`
/// (legacy HTTP/1.0 signal). Stops scanning on the first match.
pub fn pragma_requests_no_cache(value: &str) -> bool {
    let mut found = false;

    for_each_field_value(value, true, |directive| {
        if directive.eq_ignore_ascii_case(NO_CACHE_DIRECTIVE) {
            found = true;
            return false;
        }
        true
    });

    found
}

/// Outer `None`: the directive carries no assignment (not `max-age`, or the
/// `=` / value is missing) and must leave earlier state untouched. Inner
/// `Option`: the parse outcome to assign.
fn parse_max_age_directive(directive: &str) -> Option<Option<i64>> {
    let prefix = directive.get(..MAX_AGE_DIRECTIVE.len())?;
    if !prefix.eq_ignore_ascii_case(MAX_AGE_DIRECTIVE) {
        return None;
    }

    let remainder = directive[MAX_AGE_DIRECTIVE.len()..].trim_start_matches(is_header_whitespace);
    let remainder = remainder.strip_prefix('=')?;
    let remainder = remainder.trim_start_matches(is_header_whitespace);
    if remainder.is_empty() {
        return None;
    }

    Some(remainder.parse::<i64>().ok())
}

fn is_header_whitespace(ch: char) -> bool {
    ch.is_ascii_whitespace()
}

/// Parsed freshness signals of one response, gathered while its headers are
/// scanned. `age` is zero when the header is absent or unparseable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FreshnessInputs {
    pub date: Option<f64>,
    pub age: f64,
    pub expires: Option<f64>,
    pub cache_control: CacheControl,
    pub pragma_no_cache: bool,
}

/// Computes the single effective expiration timestamp (seconds since the
/// Unix epoch) for a response received at `now`.
///
/// Priority order: a `no-cache` signal beats everything; otherwise
/// `max-age` corrected by the response's age; otherwise a finite `Expires`
/// value; otherwise "long expired". The result is always finite and never
/// the zero sentinel.
pub fn effective_expiration(now: f64, inputs: &FreshnessInputs) -> f64 {
    let already_expired = now - ALREADY_EXPIRED_OFFSET_SECS;

    let computed = if inputs.cache_control.no_cache || inputs.pragma_no_cache {
        already_expired
    } else if let Some(max_age) = inputs.cache_control.max_age {
        let mut response_age = match inputs.date {
            Some(date) => {
                let elapsed = now - date;
                if elapsed.is_finite() && elapsed > 0.0 {
                    elapsed
                } else {
                    0.0
                }
            }
            None => 0.0,
        };

        if inputs.age > response_age {
            response_age = inputs.age;
        }

        // May land in the past when the response is already older than its
        // max-age; that correctly signals a stale resource.
        now + (max_age as f64 - response_age)
    } else if let Some(expires) = inputs.expires.filter(|value| value.is_finite()) {
        expires
    } else {
        0.0
    };

    if computed == 0.0 {
        already_expired
    } else {
        computed
    }
}
