use reqwest::{Method, RequestBuilder};
use url::Url;

use crate::{FictioneersHttpClient, Result};

impl FictioneersHttpClient {
    /// Resolve an API path such as `/users/me` against the versioned base URL.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.api_base.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    /// Start building a `Request` with the `Method` and `Url`.
    ///
    /// Returns a `RequestBuilder`, which will allow setting headers and
    /// the request body before sending. No authentication is attached.
    pub fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http.request(method, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_keeps_path_verbatim() {
        let client = FictioneersHttpClient::builder()
            .base_url("http://localhost:9000")
            .build()
            .unwrap();
        assert_eq!(
            client.endpoint("/timelines/t1/event-state-changes/").unwrap().as_str(),
            "http://localhost:9000/v1/timelines/t1/event-state-changes/"
        );
        assert_eq!(
            client.endpoint("/timelines/a%2Fb").unwrap().path(),
            "/v1/timelines/a%2Fb"
        );
    }
}
