//! provider 응답(JSON) 해석기.
//! http/file/command provider가 같은 규칙을 공유한다.

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

use crate::domain::project::ProjectRecord;

/// 지원 형태:
/// - 레코드 배열 `[{"name": ..}, ..]`
/// - `{"projects": [{"name": ..}, ..]}`
/// - `{"projects": {"<name>": {..}, ..}}` (사용자 설정 문서 형태, 키가 이름)
pub fn decode_projects(raw: &str) -> Result<Vec<ProjectRecord>> {
    let json: Value = serde_json::from_str(raw).context("projects payload is not valid JSON")?;

    match json {
        Value::Array(_) => records_from_array(json),
        Value::Object(mut obj) => match obj.remove("projects") {
            Some(list @ Value::Array(_)) => records_from_array(list),
            Some(Value::Object(named)) => Ok(records_from_named_map(named)),
            Some(_) => bail!("`projects` must be an array or an object"),
            None => bail!("projects payload has no `projects` field"),
        },
        _ => bail!("projects payload must be a JSON array or object"),
    }
}

fn records_from_array(list: Value) -> Result<Vec<ProjectRecord>> {
    serde_json::from_value(list).context("invalid project record")
}

fn records_from_named_map(named: Map<String, Value>) -> Vec<ProjectRecord> {
    named
        .into_iter()
        .map(|(name, value)| {
            let mut extra = match value {
                Value::Object(fields) => fields,
                _ => Map::new(),
            };
            // 키가 이름이다.
            extra.remove("name");
            ProjectRecord { name, extra }
        })
        .collect()
}
