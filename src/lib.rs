//! projlist library root.
//! 프로젝트 목록 provider를 조회해 이름을 출력하는 계층을 외부에 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use application::ports::{ProjectOutput, ProjectProvider};
use application::usecases::list_projects::ProjectLister;
use domain::options::ListOptions;
use interface::cli::AppComposition;

/// 설정 기반 실행 함수. 출력한 프로젝트 수를 반환한다.
pub async fn run(options: ListOptions) -> Result<usize> {
    let composition = AppComposition::default();
    composition.list_projects_usecase().execute(options).await
}

/// 주입된 provider/출력 대상으로 목록을 한 번 출력한다.
pub async fn list_projects(
    provider: &dyn ProjectProvider,
    output: &dyn ProjectOutput,
) -> Result<usize> {
    ProjectLister { provider, output }.list_projects().await
}

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json() -> Result<String> {
    let composition = AppComposition::default();
    composition.inspect_config_usecase().execute()
}
