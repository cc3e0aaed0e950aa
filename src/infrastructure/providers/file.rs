//! 로컬 JSON 파일 기반 프로젝트 provider.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;

use super::payload::decode_projects;
use crate::application::ports::ProjectProvider;
use crate::domain::project::ProjectRecord;

pub struct FileProjectProvider {
    path: PathBuf,
}

impl FileProjectProvider {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ProjectProvider for FileProjectProvider {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    async fn fetch_projects(&self) -> Result<Vec<ProjectRecord>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read projects file {}", self.path.display()))?;

        decode_projects(&raw)
            .with_context(|| format!("invalid projects file {}", self.path.display()))
    }
}
