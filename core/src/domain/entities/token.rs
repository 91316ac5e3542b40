//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claims carried in the token payload.
///
/// Field order matches the wire format of previously issued tokens:
/// `{"exp": ..., "nbf": ..., "email": ...}`. Serialization must stay
/// deterministic, so the payload is a fixed struct rather than a map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Expiration timestamp (seconds since the Unix epoch)
    pub exp: i64,

    /// Not-before timestamp (seconds since the Unix epoch)
    pub nbf: i64,

    /// Authenticated subject identifier
    pub email: String,
}

impl Claims {
    /// Creates claims valid from `issued_at` until `issued_at + validity`.
    ///
    /// A negative validity collapses to zero so that `nbf <= exp` holds for
    /// every constructed value.
    pub fn new(email: impl Into<String>, issued_at: DateTime<Utc>, validity: Duration) -> Self {
        let nbf = issued_at.timestamp();
        Self {
            exp: nbf + validity.num_seconds().max(0),
            nbf,
            email: email.into(),
        }
    }

    /// Seconds between `nbf` and `exp`
    pub fn validity_seconds(&self) -> i64 {
        self.exp - self.nbf
    }

    /// Whether the validity window has started at `now`
    pub fn is_active_at(&self, now: i64) -> bool {
        now >= self.nbf
    }

    /// Whether the token is expired at `now`
    pub fn is_expired_at(&self, now: i64) -> bool {
        now > self.exp
    }

    /// Whether `now` falls inside the validity window (inclusive bounds)
    pub fn is_valid_at(&self, now: i64) -> bool {
        self.is_active_at(now) && !self.is_expired_at(now)
    }
}
