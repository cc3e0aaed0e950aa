//! CLI 명령 파싱 모듈.

use clap::{Parser, Subcommand};

use crate::domain::options::{ListOptions, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "projlist")]
#[command(about = "Print the name of every project returned by the configured provider")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Print the full project records as JSON
    #[arg(long)]
    json: bool,

    /// Fetch projects from this HTTP endpoint instead of the configured provider
    #[arg(long, value_name = "URL", conflicts_with = "file")]
    endpoint: Option<String>,

    /// Read projects from this JSON file instead of the configured provider
    #[arg(long, value_name = "PATH")]
    file: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show effective merged config and provider selection
    Config,
}

#[derive(Debug)]
pub enum CliAction {
    InspectConfig,
    List(ListOptions),
}

impl Cli {
    pub fn parse_action() -> CliAction {
        Cli::parse().into_action()
    }

    fn into_action(self) -> CliAction {
        match self.command {
            Some(Commands::Config) => CliAction::InspectConfig,
            None => CliAction::List(ListOptions {
                format: if self.json {
                    OutputFormat::Json
                } else {
                    OutputFormat::Lines
                },
                endpoint: self.endpoint,
                file: self.file,
            }),
        }
    }
}
