//! HTTP client for the footfall backend.
//!
//! Wraps `reqwest` with the dashboard's endpoints and typed response
//! decoding. No request timeout is configured; transport defaults apply.

use crate::app::{summary_path, UPLOAD_PATH};
use crate::errors::ControllerError;
use crate::models::{FootfallQuery, FootfallResult, SelectedFile, UploadReceipt};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/";

pub struct FootfallClient {
    client: Client,
    base_url: Url,
}

impl FootfallClient {
    /// Creates a client rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::InvalidBaseUrl`] if `base_url` does not
    /// parse, or [`ControllerError::Http`] if the `reqwest::Client` cannot be
    /// built.
    pub fn new(base_url: &str) -> Result<Self, ControllerError> {
        let client = Client::builder()
            .user_agent(concat!("footfall-dashboard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        // Exactly one trailing slash, so joins keep any path prefix.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|err| ControllerError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: err.to_string(),
        })?;

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves a page-relative path such as `/api/footfall/2024/1/2`.
    pub fn resolve(&self, path: &str) -> Result<Url, ControllerError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|err| ControllerError::InvalidBaseUrl {
                url: format!("{}{}", self.base_url, path),
                reason: err.to_string(),
            })
    }

    /// Fetches one day's summary.
    ///
    /// The body is decoded whatever the status, since the backend reports
    /// missing days as a 404 carrying an `error` payload.
    ///
    /// # Errors
    ///
    /// - [`ControllerError::Http`] on network failure.
    /// - [`ControllerError::Decode`] or [`ControllerError::MissingField`] if
    ///   the body is neither a summary nor an error payload.
    pub async fn fetch_summary(&self, query: &FootfallQuery) -> Result<FootfallResult, ControllerError> {
        let url = self.resolve(&summary_path(query))?;
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!(%query, %status, bytes = body.len(), "footfall summary received");
        FootfallResult::from_slice(&body)
    }

    /// Posts `file` as the multipart field `video`.
    ///
    /// # Errors
    ///
    /// - [`ControllerError::Status`] for any non-success status; the body is
    ///   not read.
    /// - [`ControllerError::Http`] on network failure.
    /// - [`ControllerError::MissingField`] if the response has no
    ///   `download_url`.
    pub async fn upload_video(&self, file: SelectedFile) -> Result<UploadReceipt, ControllerError> {
        let url = self.resolve(UPLOAD_PATH)?;
        let mime = file.mime_type();
        let bytes = file.bytes.len();
        let part = Part::bytes(file.bytes)
            .file_name(file.name)
            .mime_str(mime)?;
        let form = Form::new().part("video", part);

        debug!(%url, bytes, mime, "uploading video");
        let response = self.client.post(url).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ControllerError::Status(status));
        }

        let body = response.bytes().await?;
        UploadReceipt::from_slice(&body)
    }
}
