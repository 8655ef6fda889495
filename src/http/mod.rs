//! Authenticated HTTP core.
//!
//! Wraps the transport with bearer-token attachment, response
//! normalization, and coordinated token refresh: the first request to see
//! a 401 drives a single refresh call while every other 401 in the same
//! window parks in a FIFO queue and is replayed once the new token lands.
//! Transport-level failures are never normalized; they propagate to the
//! caller as-is.

pub mod response;
pub mod token;

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use reqwest::{Method, StatusCode, Url};
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

use crate::config::ApiConfig;
use crate::endpoints;
use crate::error::{ApiError, ApiResult};
use response::{classify, ApiResponse, SuccessResponse};
use token::{TokenStore, API_REFRESH_TOKEN_KEY, API_TOKEN_KEY};

/// Hook invoked when the session cannot be recovered. The surrounding
/// application clears its identity state and shows its login entry point;
/// the client itself only clears token storage.
pub type SessionEndHook = Arc<dyn Fn() + Send + Sync>;

/// Per-request knobs. `timeout` overrides the client-wide timeout;
/// `cancel` aborts the call (including one parked for replay) without
/// disturbing anything else in flight.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub timeout: Option<Duration>,
    pub cancel: Option<CancellationToken>,
}

/// Refresh coordination state. The queue only exists while a refresh is in
/// flight, and is taken in one piece when the state returns to idle.
enum RefreshState {
    Idle,
    Refreshing { queue: Vec<oneshot::Sender<Option<String>>> },
}

/// Body of the refresh endpoint response.
#[derive(Debug, Deserialize)]
struct RefreshedToken {
    #[serde(rename = "accessToken")]
    access_token: String,
}

struct ClientInner {
    http: reqwest::Client,
    base_url: Url,
    store: Arc<dyn TokenStore>,
    refresh: Mutex<RefreshState>,
    on_session_end: Option<SessionEndHook>,
}

/// Authenticated API client. Cheap to clone; all clones share token
/// storage and refresh coordination.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("has_token", &self.access_token().is_some())
            .finish()
    }
}

impl ApiClient {
    /// Create a client against the configured base address.
    pub fn new(
        config: &ApiConfig,
        store: Arc<dyn TokenStore>,
        on_session_end: Option<SessionEndHook>,
    ) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        // Base must end with a slash so relative paths append instead of
        // replacing the last segment.
        let mut base = config.base_url.trim_end_matches('/').to_string();
        base.push('/');
        let base_url = Url::parse(&base)
            .map_err(|e| ApiError::Config(format!("invalid base URL {:?}: {e}", config.base_url)))?;

        tracing::debug!(base_url = %base_url, "creating API client");

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                store,
                refresh: Mutex::new(RefreshState::Idle),
                on_session_end,
            }),
        })
    }

    fn url(&self, path: &str) -> ApiResult<Url> {
        self.inner
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::Config(format!("invalid request path {path:?}: {e}")))
    }

    /// Current access token, if any.
    pub fn access_token(&self) -> Option<String> {
        self.inner.store.get(API_TOKEN_KEY)
    }

    /// Persist a token pair after login.
    pub fn store_session(&self, access_token: &str, refresh_token: &str) {
        self.inner.store.set(API_TOKEN_KEY, access_token);
        self.inner.store.set(API_REFRESH_TOKEN_KEY, refresh_token);
    }

    /// Drop all stored tokens (without invoking the session-end hook).
    pub fn clear_session(&self) {
        self.inner.store.clear();
    }

    fn refresh_state(&self) -> MutexGuard<'_, RefreshState> {
        // Poisoning cannot leave the state inconsistent: transitions are
        // single assignments.
        self.inner.refresh.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn end_session(&self) {
        tracing::info!("session cannot be refreshed, clearing stored tokens");
        self.inner.store.clear();
        if let Some(hook) = &self.inner.on_session_end {
            hook();
        }
    }

    /// Issue a request. Attaches the stored access token, classifies the
    /// response, and transparently recovers from a 401 through the refresh
    /// protocol. Transport errors surface unmodified.
    pub async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> ApiResult<ApiResponse> {
        let cancel = options.cancel.clone();
        let call = self.request_inner(method, path, body, &options);
        match cancel {
            Some(token) => tokio::select! {
                _ = token.cancelled() => Err(ApiError::Cancelled),
                outcome = call => outcome,
            },
            None => call.await,
        }
    }

    async fn request_inner<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> ApiResult<ApiResponse> {
        let allowed = [
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ];
        if !allowed.contains(&method) {
            return Err(ApiError::Config(format!(
                "unsupported request method: {method}"
            )));
        }
        let url = self.url(path)?;
        let response = self
            .send(method.clone(), url.clone(), body, options, self.access_token())
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return self.recover_unauthorized(method, url, body, options).await;
        }
        classify(response).await
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
        options: &RequestOptions,
        bearer: Option<String>,
    ) -> ApiResult<reqwest::Response> {
        let mut builder = self.inner.http.request(method, url);
        if let Some(token) = bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        builder.send().await.map_err(ApiError::from)
    }

    /// 401 recovery. Exactly one refresh call runs per wave; every other
    /// request parks in the queue and replays with the refreshed token, in
    /// the order the 401s were observed.
    async fn recover_unauthorized<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> ApiResult<ApiResponse> {
        let parked = {
            let mut state = self.refresh_state();
            match &mut *state {
                RefreshState::Refreshing { queue } => {
                    let (tx, rx) = oneshot::channel();
                    queue.push(tx);
                    Some(rx)
                }
                RefreshState::Idle => {
                    *state = RefreshState::Refreshing { queue: Vec::new() };
                    None
                }
            }
        };

        match parked {
            Some(waiter) => match waiter.await {
                Ok(Some(new_token)) => {
                    let response = self.send(method, url, body, options, Some(new_token)).await?;
                    self.finish_replay(response).await
                }
                Ok(None) | Err(_) => Err(ApiError::SessionExpired),
            },
            None => {
                // This request drives the refresh. The call itself runs on
                // a detached task so the REFRESHING -> IDLE transition and
                // queue drain complete even if this caller is cancelled
                // mid-wait.
                let (tx, rx) = oneshot::channel::<Result<String, ApiError>>();
                let client = self.clone();
                tokio::spawn(async move {
                    let outcome = client.run_refresh().await;
                    let queue = {
                        let mut state = client.refresh_state();
                        match std::mem::replace(&mut *state, RefreshState::Idle) {
                            RefreshState::Refreshing { queue } => queue,
                            RefreshState::Idle => Vec::new(),
                        }
                    };
                    match outcome {
                        Ok(new_token) => {
                            tracing::debug!(waiters = queue.len(), "access token refreshed");
                            for waiter in queue {
                                let _ = waiter.send(Some(new_token.clone()));
                            }
                            let _ = tx.send(Ok(new_token));
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "token refresh failed");
                            client.end_session();
                            for waiter in queue {
                                let _ = waiter.send(None);
                            }
                            let _ = tx.send(Err(err));
                        }
                    }
                });

                match rx.await {
                    Ok(Ok(new_token)) => {
                        let response = self.send(method, url, body, options, Some(new_token)).await?;
                        self.finish_replay(response).await
                    }
                    Ok(Err(err)) => Err(err),
                    Err(_) => Err(ApiError::SessionExpired),
                }
            }
        }
    }

    /// Classify a replayed response. A second 401 means the freshly minted
    /// token was rejected too; that is terminal for this call, not a
    /// trigger for another refresh wave.
    async fn finish_replay(&self, response: reqwest::Response) -> ApiResult<ApiResponse> {
        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(ApiError::SessionExpired);
        }
        classify(response).await
    }

    /// Exchange the stored refresh token for a new access token and
    /// persist it. Runs at most once concurrently, enforced by the caller.
    async fn run_refresh(&self) -> ApiResult<String> {
        let Some(refresh_token) = self.inner.store.get(API_REFRESH_TOKEN_KEY) else {
            return Err(ApiError::SessionExpired);
        };

        tracing::debug!("access token rejected, refreshing session");
        let url = self.url(endpoints::auth::REFRESH)?;
        let payload = serde_json::json!({ "refreshToken": refresh_token });
        let response = self
            .send(Method::POST, url, Some(&payload), &RequestOptions::default(), None)
            .await?;

        if response.status() != StatusCode::OK {
            return Err(ApiError::SessionExpired);
        }
        let refreshed: RefreshedToken = response.json().await?;
        self.inner.store.set(API_TOKEN_KEY, &refreshed.access_token);
        Ok(refreshed.access_token)
    }
}

// Verb helpers used by the typed API groups. Every documented Libris
// endpoint answers 200 envelopes, so these unwrap straight to the
// normalized success shape.
impl ApiClient {
    pub async fn get(&self, path: &str) -> ApiResult<SuccessResponse> {
        self.get_with(path, RequestOptions::default()).await
    }

    pub async fn get_with(&self, path: &str, options: RequestOptions) -> ApiResult<SuccessResponse> {
        self.request::<()>(Method::GET, path, None, options)
            .await?
            .into_success()
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<SuccessResponse> {
        self.request(Method::POST, path, Some(body), RequestOptions::default())
            .await?
            .into_success()
    }

    pub async fn post_empty(&self, path: &str) -> ApiResult<SuccessResponse> {
        self.request::<()>(Method::POST, path, None, RequestOptions::default())
            .await?
            .into_success()
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<SuccessResponse> {
        self.request(Method::PUT, path, Some(body), RequestOptions::default())
            .await?
            .into_success()
    }

    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<SuccessResponse> {
        self.request(Method::PATCH, path, Some(body), RequestOptions::default())
            .await?
            .into_success()
    }

    pub async fn patch_empty(&self, path: &str) -> ApiResult<SuccessResponse> {
        self.request::<()>(Method::PATCH, path, None, RequestOptions::default())
            .await?
            .into_success()
    }

    pub async fn delete(&self, path: &str) -> ApiResult<SuccessResponse> {
        self.request::<()>(Method::DELETE, path, None, RequestOptions::default())
            .await?
            .into_success()
    }
}
