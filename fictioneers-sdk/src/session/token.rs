use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use web_time::SystemTime;

/// Subtracted from every grant's lifetime so a token is refreshed before the
/// remote service would reject it (clock skew, in-flight latency).
pub const EXPIRY_SAFETY_MARGIN: Duration = Duration::from_secs(10);

/// Raw body of a successful `POST /auth/token`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccessTokenGrant {
    /// The bearer token.
    pub access_token: String,
    /// Lifetime of the token in seconds, counted from issuance.
    pub expires_in: u64,
}

/// A cached bearer token together with the instant it stops being usable.
///
/// Token and expiry only ever exist together.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    token: String,
    expires_at: SystemTime,
}

impl AccessToken {
    /// Convert a grant into a cached token, expiring
    /// `expires_in - EXPIRY_SAFETY_MARGIN` after `issued_at`.
    ///
    /// Grants shorter than the margin produce a token that is already expired.
    pub fn from_grant(grant: AccessTokenGrant, issued_at: SystemTime) -> Self {
        let lifetime = Duration::from_secs(grant.expires_in).saturating_sub(EXPIRY_SAFETY_MARGIN);
        Self {
            token: grant.access_token,
            expires_at: issued_at.checked_add(lifetime).unwrap_or(issued_at),
        }
    }

    /// The bearer token value.
    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// Wall-clock instant from which the token must no longer be presented.
    pub fn expires_at(&self) -> SystemTime {
        self.expires_at
    }

    /// Whether the token is still usable at `now`. Invalid exactly at expiry.
    pub fn is_valid_at(&self, now: SystemTime) -> bool {
        now < self.expires_at
    }

    /// Whether the token is still usable right now.
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(SystemTime::now())
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grant(expires_in: u64) -> AccessTokenGrant {
        AccessTokenGrant {
            access_token: "tok".into(),
            expires_in,
        }
    }

    #[test]
    fn expiry_applies_safety_margin() {
        let issued = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let token = AccessToken::from_grant(grant(60), issued);

        assert!(token.expires_at() <= issued + Duration::from_secs(50));
        assert!(token.is_valid_at(issued));
        assert!(token.is_valid_at(issued + Duration::from_secs(49)));
        assert!(!token.is_valid_at(token.expires_at()));
        assert!(!token.is_valid_at(issued + Duration::from_secs(60)));
    }

    #[test]
    fn short_grant_is_expired_immediately() {
        let issued = SystemTime::now();
        let token = AccessToken::from_grant(grant(5), issued);
        assert_eq!(token.expires_at(), issued);
        assert!(!token.is_valid_at(issued));
    }

    #[test]
    fn grant_deserializes() {
        let grant: AccessTokenGrant =
            serde_json::from_str(r#"{"access_token":"abc","expires_in":3600,"token_type":"Bearer"}"#)
                .unwrap();
        assert_eq!(grant.access_token, "abc");
        assert_eq!(grant.expires_in, 3600);
    }

    #[test]
    fn debug_hides_token() {
        let token = AccessToken::from_grant(grant(60), SystemTime::now());
        assert!(!format!("{token:?}").contains("tok\""));
        assert_eq!(token.as_str(), "tok");
    }
}
