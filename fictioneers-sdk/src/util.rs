use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{Response, StatusCode};

use crate::errors::{Error, RequestError, Result};

// Unreserved characters per RFC 3986 stay as-is; everything else, '/' included,
// is encoded so an identifier can never add path segments.
const SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a caller supplied identifier for use as one path segment.
///
/// Empty, `.` and `..` identifiers are rejected with [`Error::InvalidArgument`]:
/// URL parsing collapses dot segments (also in their `%2E` spelling), so they
/// would address a parent resource instead.
pub(crate) fn encode_segment(segment: &str) -> Result<String> {
    if matches!(segment, "" | "." | "..") {
        return Err(Error::InvalidArgument(format!(
            "{segment:?} is not a valid identifier"
        )));
    }
    Ok(utf8_percent_encode(segment, SEGMENT_ENCODE_SET).to_string())
}

/// Canonical reason phrase for a status, e.g. `Not Found` for 404.
pub(crate) fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Unknown Error")
        .to_string()
}

/// Read the body of a failed response, falling back to the status reason.
pub(crate) async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(text) if !text.trim().is_empty() => text,
        _ => status_text(status),
    }
}

/// Convert non-2xx responses into a structured error that includes the server body.
///
/// If the status is successful (2xx), the original response is returned.
/// If the status is an error (4xx or 5xx), the response body is consumed
/// to create a `RequestError::Server` and returned as an `Err`.
pub(crate) async fn check_http_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let message = error_message(response).await;

    Err(Error::from(RequestError::Server { status, message }))
}
