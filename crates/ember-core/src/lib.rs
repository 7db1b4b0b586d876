//! Shared primitives used across Ember crates.

use core::fmt;

/// Result alias used across the workspace.
pub type EmberResult<T> = Result<T, EmberError>;

/// Workspace error with a stable machine-readable code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmberError {
    pub code: &'static str,
    pub message: String,
}

impl EmberError {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for EmberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for EmberError {}

#[cfg(test)]
mod tests {
    use super::EmberError;

    #[test]
    fn display_includes_code_and_message() {
        let error = EmberError::new("net.http.header_invalid", "bad header");
        assert_eq!(error.to_string(), "net.http.header_invalid: bad header");
    }
}
