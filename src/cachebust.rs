//! Cache-bust token module

use chrono::{SecondsFormat, Utc};
use std::fmt;

/// Query-string token derived from the process start time.
///
/// Generated once at startup and reused for every URL printed by the
/// startup reporter, so browsers and proxies that cached a previous
/// instance's pages re-fetch when the operator follows a printed link.
/// The token is informational only: it is never sent as a response
/// header and dispatch ignores it entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheBust(String);

impl CacheBust {
    /// Generate a token from the current UTC wall clock.
    pub fn generate() -> Self {
        let stamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        Self(format!("time={stamp}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheBust {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_token_shape() {
        let token = CacheBust::generate();
        let stamp = token.as_str().strip_prefix("time=").unwrap();
        assert!(DateTime::parse_from_rfc3339(stamp).is_ok());
    }

    #[test]
    fn test_tokens_sortable() {
        let a = CacheBust::generate();
        let b = CacheBust::generate();
        assert!(a.as_str() <= b.as_str());
    }
}
