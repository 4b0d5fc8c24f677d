/// The API client: request construction and response normalization
///
/// Every domain module funnels through `ApiClient`. The rules here are the
/// whole contract with the backend:
///
/// - Query strings are built from ordered pairs; array-valued parameters
///   are repeated (`?type=A&type=B`).
/// - `Authorization: Bearer <token>` is attached when the session store
///   holds a token; without a session the request proceeds unauthenticated
///   and the server is responsible for rejecting it.
/// - HTTP 204 resolves to `None` - no body parse is attempted.
/// - Other 2xx bodies parse as JSON, falling back to `None` when malformed
///   (a malformed success is treated as empty, not as an error).
/// - Non-2xx raises `ApiError::Status` with the parsed error body as
///   `details` (or `None`) and a message resolved from
///   `details.message`/`details.error` with the `"API request failed"`
///   fallback.
/// - No automatic retries. Ever.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use campuslink_client::ApiClient;
/// use campuslink_client::transport::HttpTransport;
/// use campuslink_shared::session::SessionStore;
///
/// # async fn example() -> campuslink_client::ApiResult<()> {
/// let session = SessionStore::new();
/// let transport = HttpTransport::new(
///     "https://api.campuslink.app",
///     std::time::Duration::from_secs(15),
/// ).expect("http client");
/// let api = ApiClient::new(Arc::new(transport), session);
///
/// let events = campuslink_client::events::list_events(&api, &[]).await?;
/// println!("{} events", events.len());
/// # Ok(())
/// # }
/// ```

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use campuslink_shared::session::SessionStore;

use crate::error::{ApiError, ApiResult};
use crate::transport::{ApiRequest, ApiTransport, Method};

/// Query parameter list under construction
///
/// Array-valued parameters are added as repeated pairs, matching the wire
/// convention of the backend.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single key/value pair
    pub fn add(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Adds a pair only when the value is present
    pub fn add_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.add(key, v),
            None => self,
        }
    }

    /// Adds one pair per element, repeating the key
    pub fn add_all<I, V>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        for v in values {
            self.pairs.push((key.to_string(), v.to_string()));
        }
        self
    }

    /// The encoded pairs, in insertion order
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }
}

/// Typed API client over a transport
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn ApiTransport>,
    session: SessionStore,
}

impl ApiClient {
    /// Creates a client over the given transport and session store
    pub fn new(transport: Arc<dyn ApiTransport>, session: SessionStore) -> Self {
        Self { transport, session }
    }

    /// The session store this client reads tokens from
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Issues a request and applies the normalization rules
    ///
    /// Returns the parsed JSON body, `None` for 204 or malformed 2xx bodies.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: Query,
        body: Option<JsonValue>,
    ) -> ApiResult<Option<JsonValue>> {
        let request = ApiRequest {
            method,
            path: path.to_string(),
            query: query.into_pairs(),
            body,
            bearer: self.session.token(),
        };

        tracing::debug!(method = method.as_str(), path, "issuing API request");

        let response = self.transport.send(request).await?;

        if response.status == 204 {
            return Ok(None);
        }

        if (200..300).contains(&response.status) {
            // Malformed success bodies are treated as empty, not as errors
            return Ok(serde_json::from_slice(&response.body).ok());
        }

        let err = ApiError::from_status(response.status, &response.body);
        tracing::warn!(
            method = method.as_str(),
            path,
            status = response.status,
            "API request failed: {}",
            err
        );
        Err(err)
    }

    /// GET returning a typed value
    ///
    /// An empty/malformed body is a decode error here: reads of single
    /// entities require a shape.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: Query) -> ApiResult<T> {
        let value = self.request(Method::Get, path, query, None).await?;
        decode(path, value)
    }

    /// GET returning a list, unwrapping `{"results": [...]}` envelopes
    ///
    /// Both envelope and bare-array responses yield the same list; an empty
    /// body yields an empty list.
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str, query: Query) -> ApiResult<Vec<T>> {
        let value = self.request(Method::Get, path, query, None).await?;
        decode_list(path, value)
    }

    /// POST with a JSON body, returning the typed response entity
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &(impl serde::Serialize + Sync),
    ) -> ApiResult<T> {
        let body = encode(path, body)?;
        let value = self
            .request(Method::Post, path, Query::new(), Some(body))
            .await?;
        decode(path, value)
    }

    /// POST with a JSON body, ignoring any response entity
    pub async fn post_unit(&self, path: &str, body: &(impl serde::Serialize + Sync)) -> ApiResult<()> {
        let body = encode(path, body)?;
        self.request(Method::Post, path, Query::new(), Some(body))
            .await?;
        Ok(())
    }

    /// PATCH with a JSON body, ignoring any response entity
    pub async fn patch_unit(&self, path: &str, body: &(impl serde::Serialize + Sync)) -> ApiResult<()> {
        let body = encode(path, body)?;
        self.request(Method::Patch, path, Query::new(), Some(body))
            .await?;
        Ok(())
    }

    /// DELETE, expecting 204 (or any 2xx) and no entity
    pub async fn delete_unit(&self, path: &str) -> ApiResult<()> {
        self.request(Method::Delete, path, Query::new(), None)
            .await?;
        Ok(())
    }
}

fn encode(path: &str, body: &impl serde::Serialize) -> ApiResult<JsonValue> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode {
        path: path.to_string(),
        message: format!("failed to encode request body: {e}"),
    })
}

fn decode<T: DeserializeOwned>(path: &str, value: Option<JsonValue>) -> ApiResult<T> {
    let value = value.ok_or_else(|| ApiError::Decode {
        path: path.to_string(),
        message: "empty body where an entity was expected".to_string(),
    })?;

    serde_json::from_value(value).map_err(|e| ApiError::Decode {
        path: path.to_string(),
        message: e.to_string(),
    })
}

fn decode_list<T: DeserializeOwned>(path: &str, value: Option<JsonValue>) -> ApiResult<Vec<T>> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };

    // `{"results": [...]}` envelope or bare array
    let items = match value {
        JsonValue::Object(mut map) => match map.remove("results") {
            Some(JsonValue::Array(items)) => items,
            _ => {
                return Err(ApiError::Decode {
                    path: path.to_string(),
                    message: "expected an array or a results envelope".to_string(),
                })
            }
        },
        JsonValue::Array(items) => items,
        _ => {
            return Err(ApiError::Decode {
                path: path.to_string(),
                message: "expected an array or a results envelope".to_string(),
            })
        }
    };

    items
        .into_iter()
        .map(|item| {
            serde_json::from_value(item).map_err(|e| ApiError::Decode {
                path: path.to_string(),
                message: e.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{mock::MockTransport, RawResponse};
    use serde_json::json;

    fn client_with(mock: Arc<MockTransport>, session: SessionStore) -> ApiClient {
        ApiClient::new(mock, session)
    }

    #[test]
    fn test_query_repeats_array_values() {
        let pairs = Query::new()
            .add("page", 2)
            .add_all("type", ["project", "startup_idea"])
            .into_pairs();

        assert_eq!(
            pairs,
            vec![
                ("page".to_string(), "2".to_string()),
                ("type".to_string(), "project".to_string()),
                ("type".to_string(), "startup_idea".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_204_resolves_to_none() {
        let mock = Arc::new(MockTransport::new());
        mock.push_no_content();
        let client = client_with(mock, SessionStore::new());

        let value = client
            .request(Method::Delete, "/api/feed/posts/1", Query::new(), None)
            .await
            .unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_none() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(RawResponse::new(200, b"not json".to_vec()));
        let client = client_with(mock, SessionStore::new());

        let value = client
            .request(Method::Get, "/api/events", Query::new(), None)
            .await
            .unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_non_2xx_with_unparsable_body() {
        let mock = Arc::new(MockTransport::new());
        mock.push_status(502, b"<html>bad gateway</html>".to_vec());
        let client = client_with(mock, SessionStore::new());

        let err = client
            .request(Method::Get, "/api/events", Query::new(), None)
            .await
            .unwrap_err();

        match err {
            ApiError::Status {
                status,
                message,
                details,
            } => {
                assert_eq!(status, 502);
                assert_eq!(message, crate::error::GENERIC_FAILURE);
                assert!(details.is_none());
            }
            other => panic!("expected Status, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_bearer_attached_only_with_session() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(json!([]));
        mock.push_json(json!([]));

        let session = SessionStore::new();
        let client = client_with(mock.clone(), session.clone());

        client
            .request(Method::Get, "/api/events", Query::new(), None)
            .await
            .unwrap();
        assert!(mock.requests()[0].bearer.is_none());

        session.set("token-123".to_string());
        client
            .request(Method::Get, "/api/events", Query::new(), None)
            .await
            .unwrap();
        assert_eq!(mock.requests()[1].bearer.as_deref(), Some("token-123"));
    }

    #[tokio::test]
    async fn test_get_list_unwraps_envelope_and_bare_array() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(json!({"results": [1, 2, 3]}));
        mock.push_json(json!([4, 5]));
        let client = client_with(mock, SessionStore::new());

        let enveloped: Vec<u32> = client.get_list("/api/a", Query::new()).await.unwrap();
        assert_eq!(enveloped, vec![1, 2, 3]);

        let bare: Vec<u32> = client.get_list("/api/b", Query::new()).await.unwrap();
        assert_eq!(bare, vec![4, 5]);
    }

    #[tokio::test]
    async fn test_get_list_empty_body_is_empty_list() {
        let mock = Arc::new(MockTransport::new());
        mock.push_no_content();
        let client = client_with(mock, SessionStore::new());

        let items: Vec<u32> = client.get_list("/api/a", Query::new()).await.unwrap();
        assert!(items.is_empty());
    }
}
