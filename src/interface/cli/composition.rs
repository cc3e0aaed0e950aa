//! 애플리케이션 조립(composition root) 모듈.

use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::list_projects::ListProjectsUseCase;
use crate::infrastructure::adapters::{ConsoleOutput, JsonConfigRepository, ProviderFactoryAdapter};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    provider_factory: ProviderFactoryAdapter,
    output: ConsoleOutput,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self {
            config_repo: JsonConfigRepository,
            provider_factory: ProviderFactoryAdapter,
            output: ConsoleOutput,
        }
    }
}

impl AppComposition {
    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// 프로젝트 목록 유스케이스를 생성한다.
    pub fn list_projects_usecase(&self) -> ListProjectsUseCase<'_> {
        ListProjectsUseCase {
            config_repo: &self.config_repo,
            provider_factory: &self.provider_factory,
            output: &self.output,
        }
    }
}
