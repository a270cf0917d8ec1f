//! REST client for the visualizer backend.
//!
//! All calls are blocking and synchronous; failures surface as a single
//! human-readable [`EquiviewError::Api`] message. There is no retry and no
//! partial-result handling: the backend either answers or the command fails.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::dataset::{Dataset, DatasetMeta};
use crate::error::{EquiviewError, Result};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Raw backend response before status checking.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// HTTP transport abstraction for dependency injection.
pub trait HttpBackend {
    /// Perform a GET request.
    ///
    /// # Errors
    /// Returns an error on transport failure (connect, timeout).
    fn get(&self, url: &str, token: Option<&str>) -> Result<HttpResponse>;

    /// Perform an empty-body POST request.
    ///
    /// # Errors
    /// Returns an error on transport failure (connect, timeout).
    fn post(&self, url: &str, token: Option<&str>) -> Result<HttpResponse>;

    /// POST a CSV file as a multipart form with field name `file`.
    ///
    /// # Errors
    /// Returns an error on transport failure (connect, timeout).
    fn post_csv(
        &self,
        url: &str,
        token: Option<&str>,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<HttpResponse>;
}

/// Production transport using reqwest.
///
/// This implementation cannot be unit tested without a real HTTP server,
/// so it is excluded from coverage measurement.
#[derive(Debug)]
pub struct ReqwestBackend {
    timeout: Duration,
}

impl Default for ReqwestBackend {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ReqwestBackend {
    #[must_use]
    pub const fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[cfg(not(tarpaulin_include))]
impl ReqwestBackend {
    fn client(&self) -> Result<reqwest::blocking::Client> {
        reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| EquiviewError::Api(format!("Failed to create HTTP client: {e}")))
    }

    fn apply_token(
        request: reqwest::blocking::RequestBuilder,
        token: Option<&str>,
    ) -> reqwest::blocking::RequestBuilder {
        match token {
            Some(token) => request.header("Authorization", format!("Token {token}")),
            None => request,
        }
    }

    fn dispatch(request: reqwest::blocking::RequestBuilder, url: &str) -> Result<HttpResponse> {
        let response = request.send().map_err(|e| {
            if e.is_timeout() {
                EquiviewError::Api(format!("Request timeout contacting backend: {url}"))
            } else if e.is_connect() {
                EquiviewError::Api(format!("Failed to connect to backend: {url}"))
            } else {
                EquiviewError::Api(format!("Request to {url} failed: {e}"))
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| EquiviewError::Api(format!("Failed to read response from {url}: {e}")))?
            .to_vec();

        Ok(HttpResponse { status, body })
    }
}

#[cfg(not(tarpaulin_include))]
impl HttpBackend for ReqwestBackend {
    fn get(&self, url: &str, token: Option<&str>) -> Result<HttpResponse> {
        let request = Self::apply_token(self.client()?.get(url), token);
        Self::dispatch(request, url)
    }

    fn post(&self, url: &str, token: Option<&str>) -> Result<HttpResponse> {
        let request = Self::apply_token(self.client()?.post(url), token);
        Self::dispatch(request, url)
    }

    fn post_csv(
        &self,
        url: &str,
        token: Option<&str>,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<HttpResponse> {
        let part = reqwest::blocking::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str("text/csv")
            .map_err(|e| EquiviewError::Api(format!("Invalid upload payload: {e}")))?;
        let form = reqwest::blocking::multipart::Form::new().part("file", part);

        let request = Self::apply_token(self.client()?.post(url), token).multipart(form);
        Self::dispatch(request, url)
    }
}

/// Error body shape used by the backend for 4xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Typed client over the backend's dataset endpoints.
#[derive(Debug)]
pub struct ApiClient<B: HttpBackend = ReqwestBackend> {
    base_url: String,
    token: Option<String>,
    backend: B,
}

impl ApiClient<ReqwestBackend> {
    #[must_use]
    pub fn new(base_url: &str, token: Option<String>, timeout: Duration) -> Self {
        Self::with_backend(base_url, token, ReqwestBackend::with_timeout(timeout))
    }
}

impl<B: HttpBackend> ApiClient<B> {
    pub fn with_backend(base_url: &str, token: Option<String>, backend: B) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            backend,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// Convert a non-2xx response into the single user-facing message,
    /// preferring the backend's own `{"error": ...}` detail when present.
    fn check_status(url: &str, response: HttpResponse) -> Result<Vec<u8>> {
        if (200..300).contains(&response.status) {
            return Ok(response.body);
        }

        let status = response.status;
        let message = serde_json::from_slice::<ErrorBody>(&response.body).map_or_else(
            |_| format!("Backend request failed (HTTP {status}): {url}"),
            |body| format!("Backend request failed (HTTP {status}): {}", body.error),
        );
        Err(EquiviewError::Api(message))
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let response = self.backend.get(&url, self.token.as_deref())?;
        let body = Self::check_status(&url, response)?;
        serde_json::from_slice(&body)
            .map_err(|e| EquiviewError::Api(format!("Unexpected response from {url}: {e}")))
    }

    /// `GET /datasets/`: recent datasets, newest first (backend keeps 5).
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-2xx response.
    pub fn list_datasets(&self) -> Result<Vec<DatasetMeta>> {
        self.get_json("datasets/")
    }

    /// `GET /datasets/{id}/`: full dataset with rows.
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-2xx response.
    pub fn get_dataset(&self, id: u64) -> Result<Dataset> {
        self.get_json(&format!("datasets/{id}/"))
    }

    /// `POST /datasets/upload/`: upload a CSV, returning the processed dataset.
    ///
    /// The `.csv` extension check mirrors the backend's own validation so an
    /// obviously wrong file never leaves the machine.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, has the wrong extension,
    /// or the backend rejects the upload.
    pub fn upload_csv(&self, path: &Path) -> Result<Dataset> {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| EquiviewError::Config(format!("Invalid file path: {}", path.display())))?;

        if !filename.to_lowercase().ends_with(".csv") {
            return Err(EquiviewError::Config(format!(
                "File must be a CSV: {filename}"
            )));
        }

        let bytes = fs::read(path).map_err(|source| EquiviewError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let url = self.url("datasets/upload/");
        let response = self
            .backend
            .post_csv(&url, self.token.as_deref(), filename, bytes)?;
        let body = Self::check_status(&url, response)?;
        serde_json::from_slice(&body)
            .map_err(|e| EquiviewError::Api(format!("Unexpected response from {url}: {e}")))
    }

    /// `GET /datasets/{id}/download_pdf/`: PDF report bytes, opaque to us.
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-2xx response.
    pub fn download_pdf(&self, id: u64) -> Result<Vec<u8>> {
        let url = self.url(&format!("datasets/{id}/download_pdf/"));
        let response = self.backend.get(&url, self.token.as_deref())?;
        Self::check_status(&url, response)
    }

    /// `POST /auth/logout/`: invalidate the session token server-side.
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-2xx response.
    pub fn logout(&self) -> Result<()> {
        let url = self.url("auth/logout/");
        let response = self.backend.post(&url, self.token.as_deref())?;
        Self::check_status(&url, response).map(|_| ())
    }

    /// `GET /health/`: backend liveness. Any failure reads as "down".
    #[must_use]
    pub fn health_check(&self) -> bool {
        let url = self.url("health/");
        self.backend
            .get(&url, self.token.as_deref())
            .is_ok_and(|r| (200..300).contains(&r.status))
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
