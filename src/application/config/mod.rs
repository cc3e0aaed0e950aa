//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수/프로세스 접근은 `infrastructure`에서만 수행한다.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::options::ListOptions;

pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 프로젝트 목록 provider 설정
    #[serde(default)]
    pub provider: ProviderConfig,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Http,
    File,
    Command,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ProviderConfig {
    /// provider 종류(미지정 시 채워진 필드로 추론)
    pub kind: Option<ProviderKind>,
    /// http: 목록 조회 URL
    pub endpoint: Option<String>,
    /// http: 요청 타임아웃(ms)
    pub timeout_ms: Option<u64>,
    /// file: JSON 파일 경로
    pub path: Option<String>,
    /// command: stdout으로 JSON을 출력하는 로컬 명령
    pub command: Option<String>,
    /// command: 명령 인자
    pub args: Option<Vec<String>>,
}

/// 검증이 끝난 provider 선택 결과.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProviderSelection {
    Http { endpoint: String, timeout_ms: u64 },
    File { path: PathBuf },
    Command { command: String, args: Vec<String> },
}

impl Config {
    pub(crate) fn merge_from(&mut self, other: Config) {
        self.provider.merge_from(other.provider);
    }

    /// CLI 1회성 override를 반영한다. endpoint가 file보다 우선한다.
    pub fn apply_overrides(&mut self, options: &ListOptions) {
        if let Some(endpoint) = &options.endpoint {
            self.provider.kind = Some(ProviderKind::Http);
            self.provider.endpoint = Some(endpoint.clone());
        } else if let Some(path) = &options.file {
            self.provider.kind = Some(ProviderKind::File);
            self.provider.path = Some(path.clone());
        }
    }

    /// 설정값을 검증해 실제 사용할 provider를 결정한다.
    pub fn provider_selection(&self) -> Result<ProviderSelection> {
        let cfg = &self.provider;
        let Some(kind) = cfg.kind.or_else(|| cfg.inferred_kind()) else {
            bail!(
                "no project provider configured (set provider.endpoint, provider.path or \
                 provider.command; run `projlist config` to see searched paths)"
            );
        };

        match kind {
            ProviderKind::Http => {
                let Some(endpoint) = non_empty(cfg.endpoint.as_deref()) else {
                    bail!("provider.endpoint is required for the http provider");
                };
                let parsed = Url::parse(endpoint)
                    .with_context(|| format!("invalid provider.endpoint '{endpoint}'"))?;
                if !matches!(parsed.scheme(), "http" | "https") {
                    bail!("provider.endpoint must be an http(s) URL: {endpoint}");
                }
                let timeout_ms = cfg.timeout_ms.unwrap_or(DEFAULT_HTTP_TIMEOUT_MS);
                if timeout_ms == 0 {
                    bail!("provider.timeout_ms must be greater than 0");
                }
                Ok(ProviderSelection::Http {
                    endpoint: endpoint.to_string(),
                    timeout_ms,
                })
            }
            ProviderKind::File => {
                // 공백만 있는 값은 비어 있는 것으로 보지만 경로 자체는 그대로 쓴다.
                let Some(path) = cfg.path.as_deref().filter(|p| !p.trim().is_empty()) else {
                    bail!("provider.path is required for the file provider");
                };
                Ok(ProviderSelection::File {
                    path: PathBuf::from(path),
                })
            }
            ProviderKind::Command => {
                let Some(command) = non_empty(cfg.command.as_deref()) else {
                    bail!("provider.command is required for the command provider");
                };
                Ok(ProviderSelection::Command {
                    command: command.to_string(),
                    args: cfg.args.clone().unwrap_or_default(),
                })
            }
        }
    }
}

impl ProviderConfig {
    pub(crate) fn merge_from(&mut self, other: ProviderConfig) {
        if other.kind.is_some() {
            self.kind = other.kind;
        }
        if other.endpoint.is_some() {
            self.endpoint = other.endpoint;
        }
        if other.timeout_ms.is_some() {
            self.timeout_ms = other.timeout_ms;
        }
        if other.path.is_some() {
            self.path = other.path;
        }
        if other.command.is_some() {
            self.command = other.command;
        }
        if other.args.is_some() {
            self.args = other.args;
        }
    }

    fn inferred_kind(&self) -> Option<ProviderKind> {
        if non_empty(self.endpoint.as_deref()).is_some() {
            Some(ProviderKind::Http)
        } else if non_empty(self.path.as_deref()).is_some() {
            Some(ProviderKind::File)
        } else if non_empty(self.command.as_deref()).is_some() {
            Some(ProviderKind::Command)
        } else {
            None
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
