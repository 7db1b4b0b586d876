//! Response contracts and HTTP cache-freshness computation.
//!
//! The flow mirrors response-header processing: raw header values are
//! tokenized per the HTTP/1.1 list grammar, folded into cache directives,
//! and reduced to one effective expiration timestamp attached to the
//! response record.

pub mod date;
pub mod fields;
pub mod freshness;
pub mod http;
pub mod response;
pub mod url;

pub use date::parse_age_seconds;
pub use date::parse_http_timestamp;
pub use fields::for_each_field_value;
pub use freshness::ALREADY_EXPIRED_OFFSET_SECS;
pub use freshness::CacheControl;
pub use freshness::FreshnessInputs;
pub use freshness::effective_expiration;
pub use freshness::pragma_requests_no_cache;
pub use http::Header;
pub use http::HttpStatusCode;
pub use response::ResourceResponse;
pub use url::ResourceUrl;
