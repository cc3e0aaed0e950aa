//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::{Config, ProviderSelection};
use crate::domain::project::ProjectRecord;

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 프로젝트 목록을 공급하는 외부 provider 포트.
/// 전송 방식/인증은 구현체 책임이며 유스케이스는 결과만 소비한다.
#[async_trait]
pub trait ProjectProvider: Send + Sync {
    /// 로그용 식별 문자열
    fn describe(&self) -> String;
    /// provider 순서를 유지한 프로젝트 목록 조회
    async fn fetch_projects(&self) -> Result<Vec<ProjectRecord>>;
}

/// 설정된 provider 선택에 맞는 구현체를 생성하는 팩토리 포트.
pub trait ProviderFactory: Send + Sync {
    fn build(&self, selection: &ProviderSelection) -> Result<Box<dyn ProjectProvider>>;
}

/// 목록 출력 대상 포트. `line`은 개행 없이 전달된다.
pub trait ProjectOutput: Send + Sync {
    fn line(&self, line: &str) -> Result<()>;
}
