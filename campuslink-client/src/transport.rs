/// Transport seam for the API client
///
/// This module defines the contract between the `ApiClient` and whatever
/// actually moves bytes. The client builds an `ApiRequest` (method, path,
/// query pairs, JSON body, optional bearer token) and the transport returns
/// a `RawResponse` (status + body bytes) - or a transport-level failure.
///
/// Two implementations ship:
///
/// - `HttpTransport`: reqwest over rustls, the production transport
/// - `mock::MockTransport`: canned responses plus a recorded request log,
///   used by the client and controller tests
///
/// Keeping the seam at raw bytes means all normalization rules (204 → None,
/// JSON-or-None parsing, error-body mapping) live in one place, the client,
/// and are exercised identically in production and in tests.

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::error::ApiError;

/// HTTP method for an API request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// A fully-described API request, before transport encoding
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,

    /// Path relative to the API base, e.g. `/api/events`
    pub path: String,

    /// Ordered query pairs; repeated keys encode array-valued parameters
    pub query: Vec<(String, String)>,

    /// JSON body, when the method carries one
    pub body: Option<JsonValue>,

    /// Bearer token, when a session exists
    pub bearer: Option<String>,
}

/// Raw response as seen by the client
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,

    /// Body bytes (may be empty)
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Convenience constructor for tests and fixtures
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A 200 response carrying the given JSON value
    pub fn json(value: JsonValue) -> Self {
        Self::new(200, value.to_string().into_bytes())
    }

    /// An empty 204 response
    pub fn no_content() -> Self {
        Self::new(204, Vec::new())
    }
}

/// Transport contract
///
/// Implementations move an `ApiRequest` to the server and return the raw
/// response. They must not interpret status codes or bodies - that is the
/// client's job.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Sends a request and returns the raw response
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` when no HTTP response was produced
    /// (connect failure, timeout, invalid URL).
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError>;
}

/// Production transport over reqwest
pub struct HttpTransport {
    base_url: String,
    http: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport against the given API origin
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: std::time::Duration) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    /// Creates a transport using a preconfigured reqwest client
    ///
    /// Use this to set proxies, extra headers, or connection pooling knobs.
    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let url = self.url_for(&request.path);

        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.http.request(method, &url).query(&request.query);

        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| ApiError::Transport {
            path: request.path.clone(),
            message: e.to_string(),
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport {
                path: request.path.clone(),
                message: format!("failed to read response body: {e}"),
            })?
            .to_vec();

        Ok(RawResponse { status, body })
    }
}

pub mod mock {
    //! Recording mock transport for tests
    //!
    //! Responses are served FIFO from a queue; every request is recorded so
    //! tests can assert on paths, query encoding, and bearer attachment.
    //! An exhausted queue answers 500 with an empty body rather than
    //! panicking, so a test that issues an unexpected request fails on its
    //! own assertions.

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    /// Queue-backed mock transport
    ///
    /// Responses queued with [`MockTransport::push_for`] are matched by
    /// exact request path and consulted first; everything else drains the
    /// FIFO queue. Path-keyed responses keep tests deterministic when
    /// several fetches run concurrently.
    #[derive(Default)]
    pub struct MockTransport {
        responses: Mutex<VecDeque<Result<RawResponse, String>>>,
        routed: Mutex<Vec<(String, VecDeque<RawResponse>)>>,
        requests: Mutex<Vec<ApiRequest>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queues a canned response
        pub fn push_response(&self, response: RawResponse) {
            self.responses
                .lock()
                .expect("mock lock poisoned")
                .push_back(Ok(response));
        }

        /// Queues a 200 response with the given JSON value
        pub fn push_json(&self, value: JsonValue) {
            self.push_response(RawResponse::json(value));
        }

        /// Queues an empty 204 response
        pub fn push_no_content(&self) {
            self.push_response(RawResponse::no_content());
        }

        /// Queues a status-code response with a raw body
        pub fn push_status(&self, status: u16, body: impl Into<Vec<u8>>) {
            self.push_response(RawResponse::new(status, body));
        }

        /// Queues a response served only to requests with this exact path
        pub fn push_for(&self, path: &str, response: RawResponse) {
            let mut routed = self.routed.lock().expect("mock lock poisoned");
            if let Some((_, queue)) = routed.iter_mut().find(|(p, _)| p == path) {
                queue.push_back(response);
            } else {
                routed.push((path.to_string(), VecDeque::from([response])));
            }
        }

        /// Queues a transport-level failure
        pub fn push_transport_error(&self, message: impl Into<String>) {
            self.responses
                .lock()
                .expect("mock lock poisoned")
                .push_back(Err(message.into()));
        }

        /// All requests seen so far, in order
        pub fn requests(&self) -> Vec<ApiRequest> {
            self.requests.lock().expect("mock lock poisoned").clone()
        }

        /// Number of requests seen so far
        pub fn request_count(&self) -> usize {
            self.requests.lock().expect("mock lock poisoned").len()
        }

        /// The most recent request, if any
        pub fn last_request(&self) -> Option<ApiRequest> {
            self.requests
                .lock()
                .expect("mock lock poisoned")
                .last()
                .cloned()
        }
    }

    #[async_trait]
    impl ApiTransport for MockTransport {
        async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
            let path = request.path.clone();
            self.requests
                .lock()
                .expect("mock lock poisoned")
                .push(request);

            // Path-keyed responses win over the FIFO queue
            {
                let mut routed = self.routed.lock().expect("mock lock poisoned");
                if let Some((_, queue)) = routed.iter_mut().find(|(p, _)| *p == path) {
                    if let Some(response) = queue.pop_front() {
                        return Ok(response);
                    }
                }
            }

            let next = self
                .responses
                .lock()
                .expect("mock lock poisoned")
                .pop_front();

            match next {
                Some(Ok(response)) => Ok(response),
                Some(Err(message)) => Err(ApiError::Transport { path, message }),
                None => Ok(RawResponse::new(500, Vec::new())),
            }
        }
    }
}
