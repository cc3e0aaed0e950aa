//! Provider 팩토리 포트 구현 어댑터.

use anyhow::Result;

use crate::application::config::ProviderSelection;
use crate::application::ports::{ProjectProvider, ProviderFactory};
use crate::infrastructure::providers;

pub struct ProviderFactoryAdapter;

impl ProviderFactory for ProviderFactoryAdapter {
    fn build(&self, selection: &ProviderSelection) -> Result<Box<dyn ProjectProvider>> {
        providers::build_provider(selection)
    }
}
