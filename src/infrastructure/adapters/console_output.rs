//! 콘솔 출력 포트 구현 어댑터.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::application::ports::ProjectOutput;

/// stdout에 한 줄씩 쓰는 어댑터.
/// `println!`과 달리 닫힌 파이프 같은 쓰기 오류를 호출자에게 돌려준다.
#[derive(Default)]
pub struct ConsoleOutput;

impl ProjectOutput for ConsoleOutput {
    fn line(&self, line: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}").context("failed to write to stdout")?;
        out.flush().context("failed to flush stdout")
    }
}
