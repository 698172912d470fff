use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::Result;

/// The `{ data, error, meta, status }` body most endpoints answer with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Resource payload; `None` when the API answered `null` or omitted it.
    pub data: Option<T>,
    /// Error description, usually a string.
    pub error: Option<Value>,
    /// Free-form metadata.
    pub meta: Option<Value>,
    /// Status code echoed in the body.
    pub status: Option<u16>,
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            meta: None,
            status: None,
        }
    }
}

impl<T> Envelope<T> {
    /// `error` as text: strings verbatim, anything else as compact JSON.
    pub fn error_message(&self) -> Option<String> {
        match self.error.as_ref()? {
            Value::Null => None,
            Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// What every DELETE call returns. The API sends no body for deletions, so
/// this envelope is synthesized: `data` and `meta` are `None`, `status` is
/// always `204`, and `error` carries the HTTP reason phrase for 4xx/5xx answers.
pub type DeleteResponse = Envelope<Value>;

/// A decoded response body.
///
/// Most endpoints wrap their payload in an [`Envelope`]; some answer with a bare
/// top-level JSON array, which decodes straight into `T`.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    /// A JSON object body, read as an envelope.
    Envelope(Envelope<T>),
    /// A top-level JSON array body.
    Array(T),
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decode a normalized body. An empty body reads as an empty envelope.
    pub(crate) fn from_value(value: Value) -> Result<Self> {
        Ok(if value.is_null() {
            ApiResponse::Envelope(Envelope::default())
        } else if value.is_array() {
            ApiResponse::Array(serde_json::from_value(value)?)
        } else {
            ApiResponse::Envelope(serde_json::from_value(value)?)
        })
    }
}

impl<T> ApiResponse<T> {
    /// The payload, whichever shape it arrived in.
    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResponse::Envelope(envelope) => envelope.data.as_ref(),
            ApiResponse::Array(data) => Some(data),
        }
    }

    /// Take the payload, whichever shape it arrived in.
    pub fn into_data(self) -> Option<T> {
        match self {
            ApiResponse::Envelope(envelope) => envelope.data,
            ApiResponse::Array(data) => Some(data),
        }
    }

    /// The envelope's `error` field; bare arrays never carry one.
    pub fn error(&self) -> Option<&Value> {
        match self {
            ApiResponse::Envelope(envelope) => envelope.error.as_ref(),
            ApiResponse::Array(_) => None,
        }
    }

    /// The envelope, if the body was an object.
    pub fn envelope(&self) -> Option<&Envelope<T>> {
        match self {
            ApiResponse::Envelope(envelope) => Some(envelope),
            ApiResponse::Array(_) => None,
        }
    }
}
