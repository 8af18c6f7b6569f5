//! Session credentials and the token exchange
//!
//! A [`Session`] owns everything needed to authenticate: the panel address,
//! the application credentials and, once logged in, the bearer token. The
//! token is never refreshed automatically; callers re-run `login` when the
//! panel starts answering 401.

use std::fmt;

use qinglong_domain::constants::paths;
use qinglong_domain::{BearerToken, ClientConfig};

use super::request::ApiRequest;

/// Connection parameters plus the cached bearer token
#[derive(Clone)]
pub struct Session {
    base_url: String,
    client_id: String,
    client_secret: String,
    token: Option<BearerToken>,
}

impl Session {
    /// Create an unauthenticated session from configuration
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.normalized_base_url().to_string(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            token: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Check if a token has been obtained
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&BearerToken> {
        self.token.as_ref()
    }

    /// `Authorization` header value, `"<token_type> <token>"`
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(BearerToken::authorization)
    }

    /// `GET /open/auth/token?client_id=..&client_secret=..`
    pub(crate) fn token_request(&self) -> ApiRequest {
        ApiRequest::get(paths::AUTH_TOKEN)
            .query("client_id", self.client_id.as_str())
            .query("client_secret", self.client_secret.as_str())
    }

    pub(crate) fn store(&mut self, token: BearerToken) {
        self.token = Some(token);
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("token", &self.token)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(&ClientConfig::new("http://panel:5700/", "app-id", "app-secret"))
    }

    #[test]
    fn new_session_is_unauthenticated() {
        let session = session();
        assert!(!session.is_authenticated());
        assert_eq!(session.authorization(), None);
        assert_eq!(session.base_url(), "http://panel:5700");
    }

    #[test]
    fn token_request_sends_credentials_as_query() {
        let request = session().token_request();
        assert_eq!(request.path(), "/open/auth/token");
        assert_eq!(
            request.query,
            vec![
                ("client_id".to_string(), "app-id".to_string()),
                ("client_secret".to_string(), "app-secret".to_string()),
            ]
        );
        assert!(request.body.is_none());
    }

    #[test]
    fn stored_token_drives_authorization_header() {
        let mut session = session();
        session.store(BearerToken::new("Bearer", "xyz"));
        assert!(session.is_authenticated());
        assert_eq!(session.authorization().as_deref(), Some("Bearer xyz"));
        assert!(!format!("{session:?}").contains("app-secret"));
        assert!(!format!("{session:?}").contains("xyz"));
    }
}
