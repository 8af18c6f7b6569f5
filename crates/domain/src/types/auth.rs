//! Token exchange types

use std::fmt;

use serde::{Deserialize, Serialize};

/// `data` payload of `GET /open/auth/token`
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub token: String,
    pub token_type: String,
    /// Unix timestamp (seconds) reported by the panel, if any
    #[serde(default)]
    pub expiration: Option<i64>,
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResponse")
            .field("token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expiration", &self.expiration)
            .finish()
    }
}

/// Bearer credential attached to every authenticated request
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken {
    token_type: String,
    token: String,
    expiration: Option<i64>,
}

impl BearerToken {
    pub fn new(token_type: impl Into<String>, token: impl Into<String>) -> Self {
        Self { token_type: token_type.into(), token: token.into(), expiration: None }
    }

    /// Value of the `Authorization` header: `"<token_type> <token>"`.
    pub fn authorization(&self) -> String {
        format!("{} {}", self.token_type, self.token)
    }

    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    pub fn expiration(&self) -> Option<i64> {
        self.expiration
    }
}

impl From<TokenResponse> for BearerToken {
    fn from(response: TokenResponse) -> Self {
        Self {
            token_type: response.token_type,
            token: response.token,
            expiration: response.expiration,
        }
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerToken")
            .field("token_type", &self.token_type)
            .field("token", &"<redacted>")
            .field("expiration", &self.expiration)
            .finish()
    }
}
