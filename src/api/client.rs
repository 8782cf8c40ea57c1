use async_trait::async_trait;
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    api::{
        Categories, ErrorBody, GenerationRequest, GenerationResponse, HealthStatus,
        StatisticsSnapshot,
    },
    config::ClientConfig,
    error::ClientError,
};

/// Operations the story backend exposes under its API root.
#[async_trait]
pub trait StoryApi: Send + Sync {
    /// Decodes the health body whatever the status code.
    async fn health(&self) -> Result<HealthStatus, ClientError>;
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, ClientError>;
    async fn statistics(&self) -> Result<StatisticsSnapshot, ClientError>;
    async fn categories(&self) -> Result<Categories, ClientError>;
}

#[derive(Clone)]
pub struct HttpStoryApi {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpStoryApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self::with_client(http, config))
    }

    pub fn with_client(http: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            http,
            base_url: config.api_base_url.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::InvalidInput(format!("bad endpoint {path}: {err}")))
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ClientError> {
        let url = self.endpoint(path)?;
        debug!(%url, "GET");
        let res = self.http.get(url).send().await?;
        decode_success(res).await
    }
}

#[async_trait]
impl StoryApi for HttpStoryApi {
    async fn health(&self) -> Result<HealthStatus, ClientError> {
        let url = self.endpoint("health")?;
        debug!(%url, "GET");
        let res = self.http.get(url).send().await?;
        let status = res.status();
        let body = res.bytes().await?;
        serde_json::from_slice::<serde_json::Value>(&body)
            .map(HealthStatus::from)
            .map_err(|err| ClientError::Decode(format!("health body (status {status}): {err}")))
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, ClientError> {
        let url = self.endpoint("generate")?;
        debug!(%url, length = request.length.as_str(), "POST");
        let res = self.http.post(url).json(request).send().await?;
        decode_success(res).await
    }

    async fn statistics(&self) -> Result<StatisticsSnapshot, ClientError> {
        self.get_json("statistics").await
    }

    async fn categories(&self) -> Result<Categories, ClientError> {
        self.get_json("categories").await
    }
}

/// Decodes a 2xx body as `R`; anything else becomes `ClientError::Application`.
async fn decode_success<R: DeserializeOwned>(res: Response) -> Result<R, ClientError> {
    let status = res.status();
    let body = res.bytes().await?;

    if !status.is_success() {
        let detail = serde_json::from_slice::<ErrorBody>(&body)
            .ok()
            .and_then(|err| err.message());
        return Err(ClientError::Application {
            status: status.as_u16(),
            detail,
        });
    }

    serde_json::from_slice(&body).map_err(|err| ClientError::Decode(err.to_string()))
}
