//! Domain layer
//! 프로젝트 레코드와 출력 규칙을 외부 의존성 없이 표현한다.

pub mod options;
pub mod project;
