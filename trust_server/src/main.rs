mod canned;
mod config;
mod error;
mod routes;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use anyhow::{Context as _, Result};
use crate::config::{AppConfig, DEFAULT_CONFIG_PATH};
use database::storage::{AnalysisStore, Context};
use evaluate::TrustAssessor;
use github_handler::GitHubClient;
use routes::AppState;
use std::sync::Arc;
use std::time::Duration;
use summarizer::OpenAiSummarizer;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn init_logger() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_thread_names(true)
                .with_target(false),
        )
        .init();
}

#[actix_web::main]
async fn main() -> Result<()> {
    // .env 中的变量优先于配置文件加载
    dotenvy::dotenv().ok();

    // 初始化日志记录器
    init_logger();

    // 加载配置
    let config_path =
        std::env::var("REPOTRUST_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_owned());
    let cfg = AppConfig::load_config(&config_path)?;

    // 初始化数据库连接并执行迁移
    let db_ctx = Context::new(&cfg.database_url.url)
        .await
        .context("Failed to connect to database")?;
    db_ctx
        .migrate()
        .await
        .context("Failed to run database migrations")?;
    let store: Arc<dyn AnalysisStore> = Arc::new(db_ctx.analysis_stg());

    let github = GitHubClient::new(
        cfg.github.token.clone(),
        &cfg.github.api_url,
        Duration::from_secs(cfg.github.timeout_seconds),
    )
    .context("Failed to build GitHub client")?;

    let mut assessor = TrustAssessor::new(Arc::new(github), store.clone(), cfg.scoring.clone())
        .with_overrides(cfg.overrides.clone())
        .with_per_page(cfg.github.per_page);
    if cfg.llm.enabled {
        let summarizer =
            OpenAiSummarizer::new(cfg.llm.clone()).context("Failed to build LLM client")?;
        assessor = assessor.with_summarizer(Arc::new(summarizer));
    } else {
        info!("LLM summaries disabled, reports will be stored without a summary");
    }

    let state = web::Data::new(AppState {
        assessor: Arc::new(assessor),
        store,
        demo: cfg.demo.clone(),
    });

    info!(host = %cfg.server.host, port = cfg.server.port, "starting http server");
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind((cfg.server.host.as_str(), cfg.server.port))
    .with_context(|| format!("Failed to bind {}:{}", cfg.server.host, cfg.server.port))?
    .run()
    .await?;

    Ok(())
}
