//! QingLong API client
//!
//! Authenticates once at construction, then turns every endpoint call into a
//! single blocking request. Responses are unwrapped from the panel's
//! `{"code": .., "data": ..}` envelope before they are returned.

use qinglong_domain::constants::CONTENT_TYPE_JSON;
use qinglong_domain::{ClientConfig, QlError, Result, TokenResponse};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::auth::Session;
use super::configs::Configs;
use super::crons::Crons;
use super::envs::Envs;
use super::logs::Logs;
use super::request::ApiRequest;
use super::subscriptions::Subscriptions;
use super::system::System;
use super::user::User;
use crate::errors::IntoQlError;
use crate::http::HttpClient;

/// Blocking client for a QingLong panel's open API
///
/// Not meant for concurrent use; create one client per thread or serialize
/// calls externally.
#[derive(Debug)]
pub struct QlClient {
    http: HttpClient,
    session: Session,
}

impl QlClient {
    /// Connect and authenticate with explicit credentials
    ///
    /// # Errors
    ///
    /// Returns error if the address is invalid or the token exchange fails
    pub fn new(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self> {
        Self::connect(ClientConfig::new(base_url, client_id, client_secret))
    }

    /// Connect and authenticate using a loaded configuration
    ///
    /// # Errors
    ///
    /// Returns error if the timeout is zero, the HTTP client cannot be built
    /// or login fails
    pub fn connect(config: ClientConfig) -> Result<Self> {
        config.check_timeout()?;

        let mut builder = HttpClient::builder().accept_invalid_certs(config.accept_invalid_certs);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        Self::with_http_client(config, builder.build()?)
    }

    /// Connect with a preconfigured transport
    ///
    /// # Errors
    ///
    /// Returns error if the address is invalid or login fails
    pub fn with_http_client(config: ClientConfig, http: HttpClient) -> Result<Self> {
        Url::parse(config.normalized_base_url()).map_err(|e| {
            QlError::Config(format!("Invalid panel address '{}': {}", config.base_url, e))
        })?;

        let mut client = Self { http, session: Session::new(&config) };
        client.login()?;
        Ok(client)
    }

    /// Exchange the client credentials for a fresh bearer token
    ///
    /// Called once by the constructors. Call it again after the panel starts
    /// rejecting the token; nothing re-authenticates automatically.
    ///
    /// # Errors
    ///
    /// Returns error if the token endpoint rejects the credentials or the
    /// response lacks `token`/`token_type`
    #[instrument(skip(self), fields(base_url = %self.session.base_url()))]
    pub fn login(&mut self) -> Result<()> {
        let request = self.session.token_request();
        let data = self.dispatch(request, None)?;
        let token: TokenResponse = serde_json::from_value(data).map_err(IntoQlError::into_ql)?;

        self.session.store(token.into());
        info!(client_id = %self.session.client_id(), "Authenticated against QingLong panel");
        Ok(())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Send any request and return the `data` field of the response
    ///
    /// Endpoint groups are built on top of this; it is public so callers can
    /// reach endpoints that have no dedicated method.
    ///
    /// # Errors
    ///
    /// Returns [`QlError::Request`] with the raw body for any status other
    /// than 200
    pub fn execute(&self, request: ApiRequest) -> Result<Value> {
        let authorization = self.session.authorization();
        self.dispatch(request, authorization.as_deref())
    }

    /// Like [`execute`](Self::execute), deserializing the payload into `T`
    ///
    /// # Errors
    ///
    /// Returns [`QlError::Decode`] if the payload does not match `T`
    pub fn execute_as<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let data = self.execute(request)?;
        serde_json::from_value(data).map_err(IntoQlError::into_ql)
    }

    pub fn crons(&self) -> Crons<'_> {
        Crons::new(self)
    }

    pub fn logs(&self) -> Logs<'_> {
        Logs::new(self)
    }

    pub fn subscriptions(&self) -> Subscriptions<'_> {
        Subscriptions::new(self)
    }

    pub fn configs(&self) -> Configs<'_> {
        Configs::new(self)
    }

    pub fn envs(&self) -> Envs<'_> {
        Envs::new(self)
    }

    pub fn user(&self) -> User<'_> {
        User::new(self)
    }

    pub fn system(&self) -> System<'_> {
        System::new(self)
    }

    #[instrument(skip(self, request, authorization), fields(method = %request.method, path = %request.path))]
    fn dispatch(&self, request: ApiRequest, authorization: Option<&str>) -> Result<Value> {
        let url = format!("{}{}", self.session.base_url(), request.path);

        let mut builder = self
            .http
            .request(request.method, &url)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON);

        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = request.body {
            builder = builder.body(body.into_text()?);
        }

        let response = self.http.send(builder)?;
        let status = response.status();
        let text = response.text().map_err(IntoQlError::into_ql)?;

        if status != StatusCode::OK {
            warn!(%status, "QingLong panel rejected request");
            return Err(QlError::Request { status: status.as_u16(), body: text });
        }

        debug!(bytes = text.len(), "QingLong request successful");
        unwrap_envelope(&text)
    }
}

/// Returns the `data` field of a response body.
///
/// A missing field (or a body that is not an object) yields an empty map; an
/// explicit `null` is returned as `null`.
fn unwrap_envelope(text: &str) -> Result<Value> {
    let envelope: Value = serde_json::from_str(text).map_err(IntoQlError::into_ql)?;

    match envelope {
        Value::Object(mut fields) => {
            Ok(fields.remove("data").unwrap_or_else(|| Value::Object(Map::new())))
        }
        _ => Ok(Value::Object(Map::new())),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_string, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn mount_token(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/open/auth/token"))
            .and(query_param("client_id", "app-id"))
            .and(query_param("client_secret", "app-secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 200,
                "data": {"token": "tok-1", "token_type": "Bearer", "expiration": 1_900_000_000}
            })))
            .mount(server)
            .await;
    }

    fn connect(uri: String) -> Result<QlClient> {
        QlClient::new(uri, "app-id", "app-secret")
    }

    #[test]
    fn envelope_returns_data_field() {
        assert_eq!(unwrap_envelope(r#"{"code":200,"data":[1,2]}"#).unwrap(), json!([1, 2]));
    }

    #[test]
    fn envelope_without_data_is_empty_map() {
        assert_eq!(unwrap_envelope(r#"{"code":200}"#).unwrap(), json!({}));
        assert_eq!(unwrap_envelope("[]").unwrap(), json!({}));
    }

    #[test]
    fn envelope_keeps_explicit_null() {
        assert_eq!(unwrap_envelope(r#"{"code":200,"data":null}"#).unwrap(), Value::Null);
    }

    #[test]
    fn envelope_rejects_non_json() {
        assert!(matches!(unwrap_envelope("<html>"), Err(QlError::Decode(_))));
    }

    #[test]
    fn invalid_address_fails_before_any_request() {
        let err = QlClient::new("not a url", "a", "b").unwrap_err();
        assert!(matches!(err, QlError::Config(_)));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn failed_login_never_reports_the_secret() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/open/auth/token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"code": 200, "data": {}}))
                    .set_delay(std::time::Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let config = ClientConfig::new(server.uri(), "app-id", "app-secret")
            .with_timeout(std::time::Duration::from_secs(1));
        let err = tokio::task::spawn_blocking(move || QlClient::connect(config).unwrap_err())
            .await
            .unwrap();

        assert!(matches!(err, QlError::Network(_)), "unexpected error: {err:?}");
        assert!(!err.to_string().contains("app-secret"), "secret leaked: {err}");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn sub_second_timeout_still_connects() {
        let server = MockServer::start().await;
        mount_token(&server).await;

        let config = ClientConfig::new(server.uri(), "app-id", "app-secret")
            .with_timeout(std::time::Duration::from_millis(500));
        let authenticated = tokio::task::spawn_blocking(move || {
            QlClient::connect(config).unwrap().session().is_authenticated()
        })
        .await
        .unwrap();

        assert!(authenticated);
    }

    #[test]
    fn zero_timeout_fails_before_any_request() {
        let mut config = ClientConfig::new("http://127.0.0.1:9", "a", "b");
        config.timeout_secs = Some(0);
        assert!(matches!(QlClient::connect(config), Err(QlError::Config(_))));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn login_sets_authorization_from_token_response() {
        let server = MockServer::start().await;
        mount_token(&server).await;

        let uri = server.uri();
        let authorization = tokio::task::spawn_blocking(move || {
            connect(uri).unwrap().session().authorization()
        })
        .await
        .unwrap();

        assert_eq!(authorization.as_deref(), Some("Bearer tok-1"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn construction_fails_when_login_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/open/auth/token"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid client"))
            .mount(&server)
            .await;

        let uri = server.uri();
        let err = tokio::task::spawn_blocking(move || connect(uri).unwrap_err()).await.unwrap();

        assert_eq!(err, QlError::Request { status: 401, body: "invalid client".to_string() });
        assert!(err.is_unauthorized());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn requests_carry_auth_and_json_content_type() {
        let server = MockServer::start().await;
        mount_token(&server).await;
        Mock::given(method("GET"))
            .and(path("/open/crons"))
            .and(header("Authorization", "Bearer tok-1"))
            .and(header("content-type", "application/json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"code": 200, "data": []})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let data = tokio::task::spawn_blocking(move || {
            connect(uri).unwrap().execute(ApiRequest::get("/open/crons")).unwrap()
        })
        .await
        .unwrap();

        assert_eq!(data, json!([]));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn non_200_statuses_fail_with_raw_body() {
        let server = MockServer::start().await;
        mount_token(&server).await;
        Mock::given(method("GET"))
            .and(path("/open/crons/99"))
            .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"code":404}"#))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/open/crons"))
            .respond_with(ResponseTemplate::new(201).set_body_string("created"))
            .mount(&server)
            .await;

        let uri = server.uri();
        let (missing, created) = tokio::task::spawn_blocking(move || {
            let client = connect(uri).unwrap();
            (
                client.execute(ApiRequest::get("/open/crons/99")).unwrap_err(),
                client.execute(ApiRequest::post("/open/crons")).unwrap_err(),
            )
        })
        .await
        .unwrap();

        assert_eq!(missing.to_string(), r#"Request failed: {"code":404}"#);
        assert_eq!(created.status(), Some(201));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn raw_string_bodies_are_forwarded_unchanged() {
        let server = MockServer::start().await;
        mount_token(&server).await;
        Mock::given(method("PUT"))
            .and(path("/open/crons/run"))
            .and(body_string("[1,  2]"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200})))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let data = tokio::task::spawn_blocking(move || {
            connect(uri).unwrap().execute(ApiRequest::put("/open/crons/run").body("[1,  2]")).unwrap()
        })
        .await
        .unwrap();

        assert_eq!(data, json!({}));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn relogin_replaces_the_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/open/auth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 200,
                "data": {"token": "first", "token_type": "Bearer"}
            })))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/open/auth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 200,
                "data": {"token": "second", "token_type": "Bearer"}
            })))
            .mount(&server)
            .await;

        let uri = server.uri();
        let (before, after) = tokio::task::spawn_blocking(move || {
            let mut client = connect(uri).unwrap();
            let before = client.session().authorization();
            client.login().unwrap();
            (before, client.session().authorization())
        })
        .await
        .unwrap();

        assert_eq!(before.as_deref(), Some("Bearer first"));
        assert_eq!(after.as_deref(), Some("Bearer second"));
    }
}
