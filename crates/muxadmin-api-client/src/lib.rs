//! HTTP client for the Mux video uploader admin API.
//!
//! Every request carries `Authorization: Bearer {token}` from the
//! [`SessionContext`] the client was built with. Bodies are either JSON or a
//! multipart form. Failures are returned as-is: there are no retries and no
//! timeout beyond reqwest's defaults.

pub mod api;

use muxadmin_core::{AdminError, AdminResult, SessionContext};
use reqwest::multipart::Form;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Request body variants accepted by [`ApiClient::request`].
pub enum RequestBody {
    Json(serde_json::Value),
    Multipart(Form),
}

impl RequestBody {
    pub fn json<B: Serialize>(body: &B) -> AdminResult<Self> {
        Ok(RequestBody::Json(serde_json::to_value(body)?))
    }

    /// Build a multipart form of text fields.
    pub fn form<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, String)>,
    {
        let form = fields
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value));
        RequestBody::Multipart(form)
    }
}

/// HTTP client for the admin API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    session: SessionContext,
}

impl ApiClient {
    pub fn new(session: SessionContext) -> AdminResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("muxadmin/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AdminError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, session })
    }

    /// Create client from environment (see [`SessionContext::from_env`]).
    pub fn from_env() -> AdminResult<Self> {
        Self::new(SessionContext::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        self.session.base_url()
    }

    pub fn build_url(&self, path: &str) -> String {
        self.session.url(path)
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.bearer_auth(self.session.token())
    }

    /// Send an authenticated request and return the raw response once it is
    /// known to be successful.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
    ) -> AdminResult<Response> {
        let url = self.build_url(path);
        tracing::debug!(method = %method, path = %path, "Sending admin API request");

        let mut request = self.apply_auth(self.client.request(method.clone(), &url));
        request = match body {
            Some(RequestBody::Json(value)) => request.json(&value),
            Some(RequestBody::Multipart(form)) => request.multipart(form),
            None => request,
        };

        let response = request.send().await.map_err(network_error)?;
        ensure_success(method, path, response).await
    }

    /// Send a request and deserialize the JSON response.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
    ) -> AdminResult<T> {
        let response = self.send(method, path, body).await?;
        response
            .json()
            .await
            .map_err(|e| AdminError::Network(format!("Failed to parse response as JSON: {}", e)))
    }

    /// Send a request and deserialize the JSON response if the server sent
    /// one. An empty body yields `None`.
    pub async fn request_optional<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
    ) -> AdminResult<Option<T>> {
        let response = self.send(method, path, body).await?;
        let text = response.text().await.map_err(network_error)?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| AdminError::Network(format!("Failed to parse response as JSON: {}", e)))
    }

    /// Send a request whose response body is not needed.
    pub async fn request_unit(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
    ) -> AdminResult<()> {
        self.send(method, path, body).await.map(|_| ())
    }

    /// GET request. `path` may already carry a query string.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> AdminResult<T> {
        self.request(Method::GET, path, None).await
    }

    /// POST JSON body and deserialize response.
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> AdminResult<T> {
        self.request(Method::POST, path, Some(RequestBody::json(body)?))
            .await
    }

    /// PUT JSON body and deserialize response.
    pub async fn put_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> AdminResult<T> {
        self.request(Method::PUT, path, Some(RequestBody::json(body)?))
            .await
    }

    /// POST multipart form and deserialize response.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        body: RequestBody,
    ) -> AdminResult<T> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// PUT raw bytes to an absolute URL handed out by the video host.
    /// The CMS bearer token is not sent there.
    pub async fn upload_file_to(&self, url: &str, bytes: Vec<u8>) -> AdminResult<()> {
        tracing::debug!(size = bytes.len(), "Uploading file to direct upload URL");
        let response = self
            .client
            .put(url)
            .body(bytes)
            .send()
            .await
            .map_err(network_error)?;
        ensure_success(Method::PUT, "<direct upload>", response)
            .await
            .map(|_| ())
    }

    /// Raw client for custom requests. Caller must apply auth.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

fn network_error(err: reqwest::Error) -> AdminError {
    tracing::error!(error = %err, "Admin API request failed");
    AdminError::Network(err.to_string())
}

/// Map non-2xx responses to `AdminError::Server`, keeping the JSON body when
/// the server sent one.
async fn ensure_success(method: Method, path: &str, response: Response) -> AdminResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let body = serde_json::from_str::<serde_json::Value>(&text).ok();
    tracing::warn!(
        method = %method,
        path = %path,
        status = status.as_u16(),
        "Admin API request returned an error status"
    );

    Err(AdminError::Server {
        status: status.as_u16(),
        body,
    })
}

// Re-export domain types for convenience.
pub use muxadmin_core::models::{
    Asset, AssetPage, AssetUpdatePatch, ConfigStatus, DirectUpload, ListQuery, MuxSettings,
    PlaybackToken, SearchCriterion, SortCriterion, TokenPurpose, UploadInfo, UploadMedia,
    UploadOrigin, UploadResponse,
};
