use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use evaluate::{AssessOverrides, ScoringConfig};
use github_handler::{DEFAULT_API_URL, DEFAULT_PER_PAGE};
use serde::Deserialize;
use summarizer::OpenAiConfig;

pub const DEFAULT_CONFIG_PATH: &str = "trust_server/config";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8000,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseUrlConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GitHubConfig {
    pub token: Option<String>,
    pub api_url: String,
    pub per_page: u32,
    pub timeout_seconds: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_url: DEFAULT_API_URL.to_owned(),
            per_page: DEFAULT_PER_PAGE,
            timeout_seconds: 30,
        }
    }
}

/// `GET /api/analyze-repo` 演示接口的延迟区间
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: 3000,
            max_delay_ms: 8000,
        }
    }
}

/// 服务配置
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub database_url: DatabaseUrlConfig,
    #[serde(default)]
    pub github: GitHubConfig,
    #[serde(default)]
    pub llm: OpenAiConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub overrides: AssessOverrides,
    #[serde(default)]
    pub demo: DemoConfig,
}

impl AppConfig {
    pub fn load_config(config_path: &str) -> anyhow::Result<Self> {
        let config: Self = Config::builder()
            .add_source(
                File::with_name(config_path)
                    .format(FileFormat::Toml)
                    .required(true),
            )
            .add_source(
                Environment::with_prefix("REPOTRUST")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| anyhow::anyhow!("Failed to load config"))?
            .try_deserialize()
            .with_context(|| anyhow::anyhow!("Failed to deserialize config"))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.llm.enabled && self.llm.api_key.trim().is_empty() {
            anyhow::bail!(
                "llm.enabled is set but llm.api_key is empty (set REPOTRUST__LLM__API_KEY)"
            );
        }
        if self.demo.min_delay_ms > self.demo.max_delay_ms {
            anyhow::bail!(
                "demo.min_delay_ms ({}) exceeds demo.max_delay_ms ({})",
                self.demo.min_delay_ms,
                self.demo.max_delay_ms
            );
        }
        if self.scoring.max_score == 0 {
            anyhow::bail!("scoring.max_score must be positive");
        }
        Ok(())
    }
}
