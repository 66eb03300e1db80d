use crate::canned::{random_analysis, random_delay};
use crate::config::DemoConfig;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use database::storage::AnalysisStore;
use entity::github_analysis;
use evaluate::TrustAssessor;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 列表接口返回的最大记录数
pub const RECENT_ANALYSES_LIMIT: u64 = 10;

pub struct AppState {
    pub assessor: Arc<TrustAssessor>,
    pub store: Arc<dyn AnalysisStore>,
    pub demo: DemoConfig,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub repo: Option<String>,
}

#[derive(Debug, Serialize)]
struct AnalysisResponse {
    analysis: String,
}

#[derive(Debug, Serialize)]
struct ListResponse {
    results: Vec<github_analysis::Model>,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()),
    )
    .service(
        web::scope("/api/analyze-repo")
            .route("", web::get().to(demo_analysis))
            .route("", web::post().to(analyze_repo))
            .route("/list", web::get().to(list_analyses)),
    );
}

/// 演示接口: 随机延迟后返回一条预置评语
async fn demo_analysis(state: web::Data<AppState>) -> HttpResponse {
    actix_web::rt::time::sleep(random_delay(&state.demo)).await;
    HttpResponse::Ok().json(AnalysisResponse {
        analysis: random_analysis().to_owned(),
    })
}

async fn analyze_repo(
    state: web::Data<AppState>,
    body: web::Json<AnalyzeRequest>,
) -> Result<HttpResponse, ApiError> {
    let repo = body.into_inner().repo.unwrap_or_default();
    let report = state.assessor.assess(&repo).await?;
    Ok(HttpResponse::Ok().json(AnalysisResponse {
        analysis: report.summary,
    }))
}

async fn list_analyses(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let results = state.store.latest(RECENT_ANALYSES_LIMIT).await?;
    Ok(HttpResponse::Ok().json(ListResponse { results }))
}
