//! 실행 옵션 값 객체.

/// 목록 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `Project: <name>` 한 줄씩
    #[default]
    Lines,
    /// 전체 레코드를 pretty JSON 으로
    Json,
}

/// 목록 실행 1회에 적용되는 옵션.
/// `endpoint`/`file`은 설정 파일의 provider 선택을 덮어쓴다.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub format: OutputFormat,
    pub endpoint: Option<String>,
    pub file: Option<String>,
}
