//! Conversions from external crate errors into [`QlError`].
//!
//! The domain crate cannot depend on reqwest, so the mapping lives here. The
//! native message is kept verbatim; nothing is reclassified as a request
//! failure, which is reserved for non-200 responses.
//!
//! The request URL is stripped from transport errors: the token exchange
//! carries the client secret in its query string.

use qinglong_domain::QlError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;

/// Extension trait to make the conversion explicit at `map_err` call sites.
pub(crate) trait IntoQlError {
    fn into_ql(self) -> QlError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → QlError */
/* -------------------------------------------------------------------------- */

impl IntoQlError for HttpError {
    fn into_ql(self) -> QlError {
        let err = self.without_url();
        if err.is_decode() {
            return QlError::Decode(err.to_string());
        }
        if err.is_builder() {
            return QlError::Config(format!("invalid http request: {err}"));
        }
        if err.is_timeout() {
            return QlError::Network(format!("http request timed out: {err}"));
        }
        QlError::Network(format!("http transport failure: {err}"))
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → QlError */
/* -------------------------------------------------------------------------- */

impl IntoQlError for JsonError {
    fn into_ql(self) -> QlError {
        QlError::Decode(format!("invalid json: {self}"))
    }
}
