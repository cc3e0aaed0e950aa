//! 로컬 명령 실행 기반 프로젝트 provider.
//! 명령의 stdout을 JSON payload로 해석한다.

use std::process::Stdio;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use super::payload::decode_projects;
use crate::application::ports::ProjectProvider;
use crate::domain::project::ProjectRecord;
use crate::infrastructure::config::command_exists;

pub struct CommandProjectProvider {
    command: String,
    args: Vec<String>,
}

impl CommandProjectProvider {
    pub fn new(command: String, args: Vec<String>) -> Self {
        Self { command, args }
    }
}

#[async_trait]
impl ProjectProvider for CommandProjectProvider {
    fn describe(&self) -> String {
        if self.args.is_empty() {
            format!("command {}", self.command)
        } else {
            format!("command {} {}", self.command, self.args.join(" "))
        }
    }

    async fn fetch_projects(&self) -> Result<Vec<ProjectRecord>> {
        if !command_exists(&self.command) {
            bail!("provider command not found in PATH: '{}'", self.command);
        }

        let output = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .with_context(|| format!("failed to spawn provider command '{}'", self.command))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        debug!(status = %output.status, bytes = stdout.len(), "provider command finished");

        if !output.status.success() {
            bail!(
                "provider command failed ({}): {}",
                output.status,
                if stderr.is_empty() {
                    "no stderr output"
                } else {
                    stderr.as_str()
                }
            );
        }

        decode_projects(&stdout).context("provider command returned an invalid projects payload")
    }
}
