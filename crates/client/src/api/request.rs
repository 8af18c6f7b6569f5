//! Request description consumed by the shared executor.

use qinglong_domain::Result;
use reqwest::Method;
use serde::Serialize;

use crate::errors::IntoQlError;

/// Request body: either already-encoded text or a JSON value
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Sent byte-for-byte
    Raw(String),
    /// Encoded with `serde_json` at send time
    Json(serde_json::Value),
}

impl RequestBody {
    /// Serializes any payload into a JSON body.
    pub fn json<T: Serialize + ?Sized>(payload: &T) -> Result<Self> {
        serde_json::to_value(payload).map(Self::Json).map_err(IntoQlError::into_ql)
    }

    pub(crate) fn into_text(self) -> Result<String> {
        match self {
            Self::Raw(text) => Ok(text),
            Self::Json(value) => serde_json::to_string(&value).map_err(IntoQlError::into_ql),
        }
    }
}

impl From<String> for RequestBody {
    fn from(text: String) -> Self {
        Self::Raw(text)
    }
}

impl From<&str> for RequestBody {
    fn from(text: &str) -> Self {
        Self::Raw(text.to_string())
    }
}

impl From<serde_json::Value> for RequestBody {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

/// One call against the open API: method, path, query and body
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) body: Option<RequestBody>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Appends one query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<RequestBody>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serializes `payload` as the JSON body.
    pub fn json<T: Serialize + ?Sized>(self, payload: &T) -> Result<Self> {
        Ok(self.body(RequestBody::json(payload)?))
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}
