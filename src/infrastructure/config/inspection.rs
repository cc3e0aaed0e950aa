//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use super::utils::command_exists;
use crate::application::config::{ProviderConfig, ProviderSelection};

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub provider: ProviderConfig,
    pub effective_provider: Option<ProviderSelection>,
    /// provider 선택이 실패한 이유
    pub provider_error: Option<String>,
    /// command provider일 때 PATH 탐지 결과
    pub command_available: Option<bool>,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let (effective_provider, provider_error) = match loaded.config.provider_selection() {
            Ok(selection) => (Some(selection), None),
            Err(err) => (None, Some(format!("{err:#}"))),
        };

        let command_available = match &effective_provider {
            Some(ProviderSelection::Command { command, .. }) => Some(command_exists(command)),
            _ => None,
        };

        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            provider: loaded.config.provider,
            effective_provider,
            provider_error,
            command_available,
        }
    }
}
