//! 프로젝트 목록 조회/출력 유스케이스.

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::ports::{ConfigRepository, ProjectOutput, ProjectProvider, ProviderFactory};
use crate::domain::options::{ListOptions, OutputFormat};

/// provider 1회 호출 결과를 순서대로 출력하는 lister.
/// provider와 출력 대상은 모두 주입받는다.
pub struct ProjectLister<'a> {
    pub provider: &'a dyn ProjectProvider,
    pub output: &'a dyn ProjectOutput,
}

impl<'a> ProjectLister<'a> {
    /// 출력한 줄 수(= 레코드 수)를 반환한다.
    /// 조회가 끝나기 전에는 아무것도 쓰지 않으므로, 실패 시 출력은 비어 있다.
    pub async fn list_projects(&self) -> Result<usize> {
        let projects = self
            .provider
            .fetch_projects()
            .await
            .context("failed to fetch projects")?;
        debug!(
            provider = %self.provider.describe(),
            count = projects.len(),
            "fetched projects"
        );

        let mut written = 0;
        for project in projects {
            self.output.line(&project.display_line())?;
            written += 1;
        }
        Ok(written)
    }

    /// 레코드 전체(부가 필드 포함)를 pretty JSON 한 덩어리로 출력한다.
    pub async fn list_projects_json(&self) -> Result<usize> {
        let projects = self
            .provider
            .fetch_projects()
            .await
            .context("failed to fetch projects")?;

        let rendered = serde_json::to_string_pretty(&projects)?;
        self.output.line(&rendered)?;
        Ok(projects.len())
    }
}

/// 설정 로딩 -> provider 생성 -> 목록 출력까지 묶은 실행 유스케이스.
pub struct ListProjectsUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub provider_factory: &'a dyn ProviderFactory,
    pub output: &'a dyn ProjectOutput,
}

impl<'a> ListProjectsUseCase<'a> {
    pub async fn execute(&self, options: ListOptions) -> Result<usize> {
        let mut config = self.config_repo.load()?;
        config.apply_overrides(&options);

        let selection = config.provider_selection()?;
        debug!(?selection, "resolved project provider");
        let provider = self.provider_factory.build(&selection)?;

        let lister = ProjectLister {
            provider: provider.as_ref(),
            output: self.output,
        };
        match options.format {
            OutputFormat::Lines => lister.list_projects().await,
            OutputFormat::Json => lister.list_projects_json().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use anyhow::bail;
    use async_trait::async_trait;

    use super::*;
    use crate::application::config::{Config, ProviderConfig, ProviderSelection};
    use crate::domain::project::ProjectRecord;

    struct StubProvider {
        result: Result<Vec<ProjectRecord>, String>,
        calls: AtomicUsize,
    }

    impl StubProvider {
        fn ok(names: &[&str]) -> Self {
            Self {
                result: Ok(names.iter().map(|n| ProjectRecord::new(*n)).collect()),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(msg: &str) -> Self {
            Self {
                result: Err(msg.to_string()),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ProjectProvider for StubProvider {
        fn describe(&self) -> String {
            "stub".to_string()
        }

        async fn fetch_projects(&self) -> Result<Vec<ProjectRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.result {
                Ok(projects) => Ok(projects.clone()),
                Err(msg) => bail!("{msg}"),
            }
        }
    }

    #[derive(Default)]
    struct MemoryOutput {
        lines: Mutex<Vec<String>>,
    }

    impl MemoryOutput {
        fn text(&self) -> String {
            self.lines
                .lock()
                .unwrap()
                .iter()
                .map(|l| format!("{l}\n"))
                .collect()
        }
    }

    impl ProjectOutput for MemoryOutput {
        fn line(&self, line: &str) -> Result<()> {
            self.lines.lock().unwrap().push(line.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn prints_each_project_in_order() {
        let provider = StubProvider::ok(&["Alpha", "Beta"]);
        let output = MemoryOutput::default();
        let lister = ProjectLister {
            provider: &provider,
            output: &output,
        };

        let written = lister.list_projects().await.unwrap();

        assert_eq!(written, 2);
        assert_eq!(output.text(), "Project: Alpha\nProject: Beta\n");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_sequence_prints_nothing() {
        let provider = StubProvider::ok(&[]);
        let output = MemoryOutput::default();
        let lister = ProjectLister {
            provider: &provider,
            output: &output,
        };

        assert_eq!(lister.list_projects().await.unwrap(), 0);
        assert_eq!(output.text(), "");
    }

    #[tokio::test]
    async fn duplicates_are_printed_as_returned() {
        let provider = StubProvider::ok(&["Gamma", "Alpha", "Gamma"]);
        let output = MemoryOutput::default();
        let lister = ProjectLister {
            provider: &provider,
            output: &output,
        };

        lister.list_projects().await.unwrap();
        assert_eq!(
            output.text(),
            "Project: Gamma\nProject: Alpha\nProject: Gamma\n"
        );
    }

    #[tokio::test]
    async fn provider_failure_propagates_without_output() {
        let provider = StubProvider::failing("connection refused");
        let output = MemoryOutput::default();
        let lister = ProjectLister {
            provider: &provider,
            output: &output,
        };

        let err = lister.list_projects().await.unwrap_err();

        assert!(format!("{err:#}").contains("connection refused"));
        assert!(err.to_string().contains("failed to fetch projects"));
        assert_eq!(output.text(), "");
    }

    #[tokio::test]
    async fn json_format_keeps_extra_fields() {
        let mut record = ProjectRecord::new("Alpha");
        record
            .extra
            .insert("id".to_string(), serde_json::json!("p-1"));
        let provider = StubProvider {
            result: Ok(vec![record]),
            calls: AtomicUsize::new(0),
        };
        let output = MemoryOutput::default();
        let lister = ProjectLister {
            provider: &provider,
            output: &output,
        };

        assert_eq!(lister.list_projects_json().await.unwrap(), 1);
        let printed: serde_json::Value = serde_json::from_str(&output.text()).unwrap();
        assert_eq!(printed, serde_json::json!([{"name": "Alpha", "id": "p-1"}]));
    }

    struct ClosedPipeOutput;

    impl ProjectOutput for ClosedPipeOutput {
        fn line(&self, _line: &str) -> Result<()> {
            bail!("broken pipe")
        }
    }

    #[tokio::test]
    async fn output_failure_propagates() {
        let provider = StubProvider::ok(&["Alpha", "Beta"]);
        let lister = ProjectLister {
            provider: &provider,
            output: &ClosedPipeOutput,
        };

        let err = lister.list_projects().await.unwrap_err();
        assert!(err.to_string().contains("broken pipe"));

        let err = lister.list_projects_json().await.unwrap_err();
        assert!(err.to_string().contains("broken pipe"));
    }

    struct FixedConfigRepository(Config);

    impl ConfigRepository for FixedConfigRepository {
        fn load(&self) -> Result<Config> {
            Ok(self.0.clone())
        }

        fn inspect_pretty_json(&self) -> Result<String> {
            Ok(serde_json::to_string_pretty(&self.0)?)
        }
    }

    struct RecordingFactory {
        seen: Mutex<Vec<ProviderSelection>>,
    }

    impl ProviderFactory for RecordingFactory {
        fn build(&self, selection: &ProviderSelection) -> Result<Box<dyn ProjectProvider>> {
            self.seen.lock().unwrap().push(selection.clone());
            Ok(Box::new(StubProvider::ok(&["FromFactory"])))
        }
    }

    #[tokio::test]
    async fn usecase_applies_cli_override_before_building_provider() {
        let config_repo = FixedConfigRepository(Config {
            provider: ProviderConfig {
                path: Some("configured.json".into()),
                ..Default::default()
            },
        });
        let factory = RecordingFactory {
            seen: Mutex::new(Vec::new()),
        };
        let output = MemoryOutput::default();
        let usecase = ListProjectsUseCase {
            config_repo: &config_repo,
            provider_factory: &factory,
            output: &output,
        };

        let written = usecase
            .execute(ListOptions {
                file: Some("override.json".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(written, 1);
        assert_eq!(output.text(), "Project: FromFactory\n");
        assert_eq!(
            factory.seen.lock().unwrap().as_slice(),
            &[ProviderSelection::File {
                path: "override.json".into()
            }]
        );
    }

    #[tokio::test]
    async fn usecase_without_provider_config_fails_before_output() {
        let config_repo = FixedConfigRepository(Config::default());
        let factory = RecordingFactory {
            seen: Mutex::new(Vec::new()),
        };
        let output = MemoryOutput::default();
        let usecase = ListProjectsUseCase {
            config_repo: &config_repo,
            provider_factory: &factory,
            output: &output,
        };

        assert!(usecase.execute(ListOptions::default()).await.is_err());
        assert!(factory.seen.lock().unwrap().is_empty());
        assert_eq!(output.text(), "");
    }
}
