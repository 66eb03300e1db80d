use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use evaluate::AssessError;
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Assess(#[from] AssessError),

    #[error("failed to load analyses: {0}")]
    Store(#[from] DbErr),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Assess(err) if err.is_validation() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // 只返回顶层错误信息, 完整错误链写入日志
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = ?self, "request failed");
        }
        HttpResponse::build(status).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
