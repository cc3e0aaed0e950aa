//! 프로젝트 레코드 엔티티와 한 줄 출력 규칙.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 목록 출력 시 각 줄 앞에 붙는 고정 접두어.
pub const LINE_PREFIX: &str = "Project: ";

/// provider가 돌려주는 프로젝트 한 건.
/// `name` 외 필드는 해석하지 않고 그대로 보존한다.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProjectRecord {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProjectRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }

    /// 출력 스트림에 쓸 한 줄(개행 제외)을 만든다.
    pub fn display_line(&self) -> String {
        format!("{LINE_PREFIX}{}", self.name)
    }
}
