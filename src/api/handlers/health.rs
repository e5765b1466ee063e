//! # Health Check Handler
//!
//! برای بررسی سلامت سرویس

use axum::{
    extract::State,
    Json,
};

use crate::{
    error::Result,
    models::HealthResponse,
    services::AppState,
};

// =====================================
// Health Check
// =====================================
/// بررسی سلامت سرویس
///
/// # مفاهیم:
/// - Health check برای Kubernetes/Docker
/// - بررسی اتصال دیتابیس با یه query واقعی
///
/// # Endpoint
/// `GET /health`
///
/// # Response
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "database": true
/// }
/// ```
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>> {
    let db_ok = state.database.health_check().await.is_ok();

    Ok(Json(HealthResponse::healthy(db_ok)))
}
