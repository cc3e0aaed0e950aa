//! HTTP API 기반 프로젝트 provider.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;
use tracing::debug;

use super::payload::decode_projects;
use crate::application::ports::ProjectProvider;
use crate::domain::project::ProjectRecord;

pub struct HttpProjectProvider {
    client: Client,
    endpoint: String,
}

impl HttpProjectProvider {
    /// 요청 단위 타임아웃을 적용한 클라이언트를 생성한다.
    pub fn new(endpoint: String, timeout_ms: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .user_agent(concat!("projlist/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("http: failed to build client")?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl ProjectProvider for HttpProjectProvider {
    fn describe(&self) -> String {
        format!("http {}", self.endpoint)
    }

    async fn fetch_projects(&self) -> Result<Vec<ProjectRecord>> {
        let resp = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .with_context(|| format!("http: failed to request {}", self.endpoint))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .context("http: failed to read response body")?;
        debug!(%status, bytes = body.len(), "http: projects response");

        if !status.is_success() {
            bail!("http: project request failed ({status}): {}", body.trim());
        }

        decode_projects(&body).context("http: invalid projects payload")
    }
}
