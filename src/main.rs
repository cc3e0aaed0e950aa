//! `projlist` 바이너리 진입점.

use anyhow::Result;
use projlist::application::ports::ProjectOutput;
use projlist::infrastructure::adapters::ConsoleOutput;
use projlist::interface::cli::{AppComposition, Cli, CliAction};

#[tokio::main]
async fn main() {
    // stdout은 프로젝트 목록 전용이므로 로그는 stderr로 보낸다.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = dispatch(Cli::parse_action()).await {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

async fn dispatch(action: CliAction) -> Result<()> {
    let composition = AppComposition::default();

    match action {
        CliAction::InspectConfig => {
            let json = composition.inspect_config_usecase().execute()?;
            ConsoleOutput.line(&json)
        }
        CliAction::List(options) => {
            composition.list_projects_usecase().execute(options).await?;
            Ok(())
        }
    }
}
