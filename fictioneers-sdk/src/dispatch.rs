use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};

use crate::{
    Fictioneers, Result, cross_log,
    headers::AuthMode,
    response::{ApiResponse, DeleteResponse},
    util::{check_http_status, status_text},
};

/// Appended to the `error` field of responses from deprecated endpoints.
pub const DEPRECATION_NOTICE: &str =
    "This endpoint is deprecated and will be removed in a future version of the API.";

/// One remote operation: verb, concrete path, auth mode and deprecation.
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    method: Method,
    path: String,
    auth: AuthMode,
    deprecated: bool,
}

impl Endpoint {
    pub(crate) fn new<P: Into<String>>(method: Method, path: P, auth: AuthMode) -> Self {
        Self {
            method,
            path: path.into(),
            auth,
            deprecated: false,
        }
    }

    pub(crate) fn get<P: Into<String>>(path: P, auth: AuthMode) -> Self {
        Self::new(Method::GET, path, auth)
    }

    pub(crate) fn post<P: Into<String>>(path: P, auth: AuthMode) -> Self {
        Self::new(Method::POST, path, auth)
    }

    pub(crate) fn patch<P: Into<String>>(path: P, auth: AuthMode) -> Self {
        Self::new(Method::PATCH, path, auth)
    }

    pub(crate) fn delete<P: Into<String>>(path: P, auth: AuthMode) -> Self {
        Self::new(Method::DELETE, path, auth)
    }

    pub(crate) fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }
}

/// Envelope standing in for the empty body of a DELETE response.
fn delete_envelope(status: StatusCode) -> Value {
    let error = (status.as_u16() >= 400).then(|| status_text(status));
    json!({
        "data": null,
        "error": error,
        "meta": null,
        "status": 204,
    })
}

/// Append [`DEPRECATION_NOTICE`] to an object body's `error`. Arrays and
/// scalars are left alone.
fn decorate_deprecated(body: &mut Value) {
    let Value::Object(map) = body else {
        return;
    };
    let error = match map.get("error") {
        None | Some(Value::Null) => DEPRECATION_NOTICE.to_string(),
        Some(Value::String(text)) if text.trim().is_empty() => DEPRECATION_NOTICE.to_string(),
        Some(Value::String(text)) => format!("{text} {DEPRECATION_NOTICE}"),
        Some(other) => format!("{other} {DEPRECATION_NOTICE}"),
    };
    map.insert("error".into(), Value::String(error));
}

impl Fictioneers {
    /// Perform one API call and return its normalized JSON body.
    ///
    /// - POST and PATCH send `body`, or `{}` when `None`; GET and DELETE send nothing.
    /// - DELETE never reads the body and never fails on status; see [`DeleteResponse`].
    /// - Any other non-2xx status, transport error or invalid JSON is an
    ///   [`crate::errors::RequestError`].
    pub(crate) async fn dispatch(&self, endpoint: &Endpoint, body: Option<Value>) -> Result<Value> {
        let url = self.client.endpoint(&endpoint.path)?;
        let headers = self.compose_headers(endpoint.auth).await?;
        cross_log!(debug, "{} {}", endpoint.method, endpoint.path);

        let mut request = self
            .client
            .request(endpoint.method.clone(), url)
            .headers(headers);
        if endpoint.method == Method::POST || endpoint.method == Method::PATCH {
            request = request.json(&body.unwrap_or_else(|| Value::Object(Map::new())));
        }

        let response = request.send().await?;

        if endpoint.method == Method::DELETE {
            let status = response.status();
            if !status.is_success() {
                cross_log!(warn, "DELETE {} answered {status}", endpoint.path);
            }
            return Ok(delete_envelope(status));
        }

        let response = check_http_status(response).await?;
        let bytes = response.bytes().await?;
        let mut value = if bytes.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        if endpoint.deprecated {
            cross_log!(warn, "{} {} is deprecated", endpoint.method, endpoint.path);
            decorate_deprecated(&mut value);
        }
        Ok(value)
    }

    /// [`Self::dispatch`] and decode the body into an [`ApiResponse`].
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        body: Option<Value>,
    ) -> Result<ApiResponse<T>> {
        ApiResponse::from_value(self.dispatch(&endpoint, body).await?)
    }

    /// [`Self::dispatch`] a DELETE and decode the synthesized envelope.
    pub(crate) async fn call_delete(&self, endpoint: Endpoint) -> Result<DeleteResponse> {
        Ok(serde_json::from_value(self.dispatch(&endpoint, None).await?)?)
    }
}
