use crate::{
    config::Config,
    error::{Error, Result},
    link::DocLink,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

/// Path of the submit endpoint, appended to the configured base URL.
pub const PROCESS_ENDPOINT: &str = "/api/process";
/// Path of the backend health endpoint.
pub const HEALTH_ENDPOINT: &str = "/api/health";

/// Request body for `POST /api/process`.
#[derive(Debug, Serialize)]
struct ProcessRequest<'a> {
    doc_url: &'a str,
}

/// Reply body of `POST /api/process`. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessReply {
    /// Degraded error replies omit the verdict; absent reads as `false`.
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    /// Workflow output text, when the backend chose to include it.
    #[serde(default)]
    pub result: Option<String>,
}

/// Reply body of `GET /api/health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthReply {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// The remote side of a submission. One implementation talks HTTP;
/// tests substitute their own.
#[async_trait::async_trait]
pub trait WorkflowBackend: Send + Sync {
    /// Submit a document link for processing.
    ///
    /// # Errors
    ///
    /// - `Error::Http` when the request cannot be sent or the reply is not
    ///   usable JSON.
    /// - `Error::Rejected` when the backend answers without `success: true`.
    async fn process(&self, link: &DocLink) -> Result<ProcessReply>;

    /// Check backend availability.
    ///
    /// # Errors
    ///
    /// Returns `Error::Http` when the backend is unreachable or answers with
    /// an error status.
    async fn health(&self) -> Result<HealthReply>;
}

/// HTTP client for the workflow backend.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpBackend {
    /// Build a client for the given base URL.
    ///
    /// The client sets no request timeout: there is exactly one
    /// user-initiated call in flight and no cancellation.
    ///
    /// # Errors
    ///
    /// Returns `Error::Http` if the underlying client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, base_url })
    }

    /// # Errors
    ///
    /// See [`HttpBackend::new`].
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.base_url.clone())
    }

    #[inline]
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join an endpoint path onto the base by concatenation. `Url::join`
    /// would drop a path prefix on the base; proxied bases keep theirs.
    fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}{path}"))
            .map_err(|err| Error::other(format!("bad endpoint url: {err}")))
    }
}

#[async_trait::async_trait]
impl WorkflowBackend for HttpBackend {
    async fn process(&self, link: &DocLink) -> Result<ProcessReply> {
        let url = self.endpoint(PROCESS_ENDPOINT)?;
        debug!(%url, link = %link, "posting document link");

        let response = self
            .client
            .post(url)
            .json(&ProcessRequest {
                doc_url: link.as_str(),
            })
            .send()
            .await?;

        // Parse the body before consulting the status: error statuses still
        // carry a JSON verdict with the reason.
        let status = response.status();
        let reply = response.json::<ProcessReply>().await?;

        if status.is_success() && reply.success {
            info!(link = %link, "workflow accepted the document");
            Ok(reply)
        } else {
            info!(%status, message = ?reply.message, "backend rejected the document");
            Err(Error::rejected(reply.message))
        }
    }

    async fn health(&self) -> Result<HealthReply> {
        let url = self.endpoint(HEALTH_ENDPOINT)?;
        debug!(%url, "checking backend health");

        let reply = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<HealthReply>()
            .await?;
        Ok(reply)
    }
}
