use crate::api::request::{self, Args, PreparedRequest};
use crate::api::{HttpMethod, Operation};
use crate::config::{ApiKey, Config};
use crate::error::ApiError;
use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Executes one catalog operation and hands back the decoded body.
#[async_trait::async_trait]
pub trait OperationClient: Send + Sync {
    async fn execute(
        &self,
        operation: &'static Operation,
        args: &Args,
    ) -> std::result::Result<Value, ApiError>;
}

#[derive(Clone)]
pub struct EtherscanClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: ApiKey,
}

impl EtherscanClient {
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).context("invalid Etherscan base URL")?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    /// Full request URL, API key last. Contains the key, so never log it.
    pub fn url_for(&self, request: &PreparedRequest) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &request.query {
                pairs.append_pair(key, value);
            }
            pairs.append_pair("apikey", self.api_key.expose());
        }
        url
    }
}

#[async_trait::async_trait]
impl OperationClient for EtherscanClient {
    async fn execute(
        &self,
        operation: &'static Operation,
        args: &Args,
    ) -> std::result::Result<Value, ApiError> {
        let request = request::build(operation, args)?;
        let url = self.url_for(&request);

        debug!(
            module = operation.module,
            action = operation.action,
            chain_id = ?request.query_value("chainid"),
            "Calling Etherscan"
        );

        let builder = match (operation.method, &request.body) {
            (HttpMethod::Post, Some(body)) => self.http.post(url).json(body),
            (HttpMethod::Post, None) => self.http.post(url),
            (HttpMethod::Get, _) => self.http.get(url),
        };

        let response = builder.send().await.map_err(ApiError::transport)?;
        let status = response.status();
        let text = response.text().await.map_err(ApiError::transport)?;

        // Non-2xx bodies are returned as-is.
        if !status.is_success() {
            debug!(%status, action = operation.action, "Etherscan returned a non-success status");
        }

        Ok(serde_json::from_str(&text)?)
    }
}
