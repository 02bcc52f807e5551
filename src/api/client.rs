//! REST Client
//!
//! Every backend call goes through [`ApiClient::execute`]. It attaches the
//! bearer token and, on a 401, refreshes the session once (shared with any
//! concurrent callers) and replays the request a single time.

use std::future::Future;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::session::Session;
use crate::config::ApiConfig;
use crate::error::{parse_detail, ApiError, ApiResult};

const REFRESH_PATH: &str = "/auth/refresh";

// ========================
// Request / Response
// ========================

/// A request that can be replayed after a token refresh
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    /// No bearer token and no refresh on 401 (login, signup, recovery flows)
    pub anonymous: bool,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            anonymous: false,
        }
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

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> ApiResult<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn anonymous(mut self) -> Self {
        self.anonymous = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn non-2xx statuses into `ApiError::Status`
    pub fn into_result(self) -> ApiResult<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::Status {
                status: self.status,
                detail: parse_detail(&self.body),
            })
        }
    }

    /// Decode the body; an empty body decodes as JSON `null`
    pub fn json<T: DeserializeOwned>(&self) -> ApiResult<T> {
        let text = if self.body.trim().is_empty() { "null" } else { self.body.as_str() };
        Ok(serde_json::from_str(text)?)
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(rename = "accessToken", alias = "access_token", default)]
    access_token: Option<String>,
}

/// Pull the access token out of a login / refresh body
pub fn extract_access_token(body: &Value) -> Option<String> {
    serde_json::from_value::<TokenResponse>(body.clone())
        .ok()
        .and_then(|t| t.access_token)
        .filter(|t| !t.is_empty())
}

// ========================
// Transport
// ========================

pub trait Transport {
    fn send(&self, request: &ApiRequest, token: Option<&str>) -> impl Future<Output = ApiResult<RawResponse>>;
}

/// Fetch-backed transport; cookies are included so the refresh cookie travels
pub struct HttpTransport {
    http: reqwest::Client,
    config: ApiConfig,
}

impl HttpTransport {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: &ApiRequest, token: Option<&str>) -> ApiResult<RawResponse> {
        let url = self.config.url_for(&request.path);
        let mut builder = self.http.request(request.method.clone(), url);
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        #[cfg(target_arch = "wasm32")]
        {
            builder = builder.fetch_credentials_include();
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

// ========================
// Client
// ========================

pub struct ApiClient<T = HttpTransport> {
    transport: T,
    session: Session,
}

impl ApiClient<HttpTransport> {
    pub fn new(config: ApiConfig) -> Self {
        log::info!("API base URL: {}", config.base_url);
        Self::with_transport(HttpTransport::new(config))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            session: Session::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Send `request`, refreshing and replaying once on a 401
    pub async fn execute(&self, request: ApiRequest) -> ApiResult<RawResponse> {
        let (response, sent_with) = self.dispatch(&request).await?;
        if response.status != 401 || request.anonymous {
            return response.into_result();
        }

        // A changed token means another caller already refreshed
        if self.session.token() == sent_with {
            log::debug!("401 on {} {}, refreshing session", request.method, request.path);
            self.refresh_session().await?;
        }

        let (replayed, _) = self.dispatch(&request).await?;
        replayed.into_result()
    }

    pub async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<R> {
        self.execute(request).await?.json()
    }

    /// POST `/auth/refresh` through the single-flight gate
    pub async fn refresh_session(&self) -> ApiResult<()> {
        self.session
            .refresh_with(|| async move {
                let request = ApiRequest::post(REFRESH_PATH).json(&serde_json::json!({}))?.anonymous();
                let (response, _) = self.dispatch(&request).await?;
                let body: Value = response.into_result()?.json()?;
                extract_access_token(&body).ok_or(ApiError::MissingToken)
            })
            .await
    }

    async fn dispatch(&self, request: &ApiRequest) -> ApiResult<(RawResponse, Option<String>)> {
        let token = if request.anonymous { None } else { self.session.token() };
        let response = self.transport.send(request, token.as_deref()).await?;
        log::debug!("{} {} -> {}", request.method, request.path, response.status);
        Ok((response, token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::pin::Pin;
    use std::task::{Context, Poll};

    /// Pending once, then ready
    struct YieldNow(bool);

    impl Future for YieldNow {
        type Output = ();
        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    /// Accepts exactly one token; `/auth/refresh` mints a new one
    #[derive(Default)]
    struct ScriptedTransport {
        valid_token: RefCell<Option<String>>,
        refresh_fails: bool,
        reject_everything: bool,
        slow_refresh: bool,
        refresh_calls: Cell<u32>,
        seen_tokens: RefCell<Vec<Option<String>>>,
    }

    impl Transport for ScriptedTransport {
        async fn send(&self, request: &ApiRequest, token: Option<&str>) -> ApiResult<RawResponse> {
            self.seen_tokens.borrow_mut().push(token.map(String::from));
            if request.path == REFRESH_PATH {
                let n = self.refresh_calls.get() + 1;
                self.refresh_calls.set(n);
                if self.slow_refresh {
                    YieldNow(false).await;
                }
                if self.refresh_fails {
                    return Ok(RawResponse { status: 401, body: r#"{"detail":"refresh token expired"}"#.into() });
                }
                let fresh = format!("fresh-{}", n);
                *self.valid_token.borrow_mut() = Some(fresh.clone());
                return Ok(RawResponse { status: 200, body: format!(r#"{{"access_token":"{}"}}"#, fresh) });
            }

            let authorized = !self.reject_everything
                && token.is_some()
                && token.map(String::from) == *self.valid_token.borrow();
            if authorized {
                Ok(RawResponse { status: 200, body: r#"{"user_id":"cook01","user_name":"김쿡"}"#.into() })
            } else {
                Ok(RawResponse { status: 401, body: r#"{"detail":"Not authenticated"}"#.into() })
            }
        }
    }

    fn client_with(transport: ScriptedTransport, token: Option<&str>) -> ApiClient<ScriptedTransport> {
        let client = ApiClient::with_transport(transport);
        if let Some(t) = token {
            client.session().set_token(t);
        }
        client
    }

    #[test]
    fn test_valid_token_passes_through() {
        let transport = ScriptedTransport::default();
        *transport.valid_token.borrow_mut() = Some("good".into());
        let client = client_with(transport, Some("good"));

        let user: User = block_on(client.fetch(ApiRequest::get("/me"))).unwrap();
        assert_eq!(user.user_id, "cook01");
        assert_eq!(client.transport.refresh_calls.get(), 0);
        assert_eq!(client.transport.seen_tokens.borrow()[0].as_deref(), Some("good"));
    }

    #[test]
    fn test_401_refreshes_and_replays_once() {
        let client = client_with(ScriptedTransport::default(), Some("stale"));

        let user: User = block_on(client.fetch(ApiRequest::get("/me"))).unwrap();
        assert_eq!(user.user_name, "김쿡");
        assert_eq!(client.transport.refresh_calls.get(), 1);
        assert_eq!(client.session().token().as_deref(), Some("fresh-1"));

        let seen = client.transport.seen_tokens.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].as_deref(), Some("stale"));
        // refresh itself is sent without a bearer token
        assert_eq!(seen[1], None);
        assert_eq!(seen[2].as_deref(), Some("fresh-1"));
    }

    #[test]
    fn test_concurrent_401s_share_one_refresh() {
        let transport = ScriptedTransport { slow_refresh: true, ..Default::default() };
        let client = client_with(transport, Some("stale"));

        let (a, b) = block_on(async {
            futures::join!(
                client.fetch::<User>(ApiRequest::get("/me")),
                client.fetch::<User>(ApiRequest::get("/me")),
            )
        });
        assert!(a.is_ok());
        assert!(b.is_ok());
        assert_eq!(client.transport.refresh_calls.get(), 1);
    }

    #[test]
    fn test_failed_refresh_clears_session() {
        let transport = ScriptedTransport { refresh_fails: true, ..Default::default() };
        let client = client_with(transport, Some("stale"));

        let err = block_on(client.fetch::<User>(ApiRequest::get("/me"))).unwrap_err();
        assert!(err.is_unauthorized());
        assert!(!client.session().has_token());
    }

    #[test]
    fn test_second_401_is_not_retried_again() {
        let transport = ScriptedTransport { reject_everything: true, ..Default::default() };
        let client = client_with(transport, Some("stale"));

        let err = block_on(client.execute(ApiRequest::get("/me"))).unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert_eq!(client.transport.refresh_calls.get(), 1);
        // original, refresh, one replay
        assert_eq!(client.transport.seen_tokens.borrow().len(), 3);
    }

    #[test]
    fn test_anonymous_requests_skip_token_and_refresh() {
        let client = client_with(ScriptedTransport::default(), Some("stale"));

        let request = ApiRequest::post("/auth/login")
            .json(&serde_json::json!({"id": "cook01", "password": "x"}))
            .unwrap()
            .anonymous();
        let err = block_on(client.execute(request)).unwrap_err();
        assert_eq!(err.message_or("로그인에 실패했어요."), "Not authenticated");
        assert_eq!(client.transport.refresh_calls.get(), 0);
        assert_eq!(client.transport.seen_tokens.borrow()[0], None);
    }

    #[test]
    fn test_extract_access_token_both_spellings() {
        assert_eq!(extract_access_token(&serde_json::json!({"accessToken": "a"})).as_deref(), Some("a"));
        assert_eq!(extract_access_token(&serde_json::json!({"access_token": "b"})).as_deref(), Some("b"));
        assert_eq!(extract_access_token(&serde_json::json!({"access_token": ""})), None);
        assert_eq!(extract_access_token(&serde_json::json!({"ok": true})), None);
    }

    #[test]
    fn test_request_builder() {
        let request = ApiRequest::get("/faq").query("query", "계란").query("limit", 30);
        assert_eq!(request.query, vec![("query".to_string(), "계란".to_string()), ("limit".to_string(), "30".to_string())]);
        assert!(!request.anonymous);
        assert!(request.body.is_none());
    }

    #[test]
    fn test_empty_body_decodes_as_null() {
        let response = RawResponse { status: 204, body: String::new() };
        let value: Option<User> = response.json().unwrap();
        assert!(value.is_none());
    }
}
