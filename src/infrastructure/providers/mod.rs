//! 프로젝트 provider 구현 모음.
//! 설정된 provider 선택에 따라 http/file/command 구현체를 생성한다.

mod command;
mod file;
mod http;
mod payload;

use anyhow::Result;

use crate::application::config::ProviderSelection;
use crate::application::ports::ProjectProvider;

pub use command::CommandProjectProvider;
pub use file::FileProjectProvider;
pub use http::HttpProjectProvider;
pub use payload::decode_projects;

pub fn build_provider(selection: &ProviderSelection) -> Result<Box<dyn ProjectProvider>> {
    let provider: Box<dyn ProjectProvider> = match selection {
        ProviderSelection::Http {
            endpoint,
            timeout_ms,
        } => Box::new(HttpProjectProvider::new(endpoint.clone(), *timeout_ms)?),
        ProviderSelection::File { path } => Box::new(FileProjectProvider::new(path.clone())),
        ProviderSelection::Command { command, args } => {
            Box::new(CommandProjectProvider::new(command.clone(), args.clone()))
        }
    };
    Ok(provider)
}
