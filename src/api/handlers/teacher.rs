//! # Teacher Handlers
//!
//! Handler‌های CRUD استاد - همون پنج عملیات دانشجو روی `/teachers/`

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    api::extractors::ValidatedJson,
    error::Result,
    models::{DeleteResponse, ListQuery, Teacher, UpdateTeacherRequest},
    services::AppState,
};

/// ثبت استاد جدید
///
/// # Endpoint
/// `POST /teachers/`
pub async fn create_teacher(
    State(state): State<AppState>,
    ValidatedJson(teacher): ValidatedJson<Teacher>,
) -> Result<impl IntoResponse> {
    let created = state.teachers.create(teacher).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// لیست اساتید با صفحه‌بندی
///
/// # Endpoint
/// `GET /teachers/?offset=0&limit=100`
pub async fn list_teachers(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Teacher>>> {
    let teachers = state.teachers.list(&query).await?;

    Ok(Json(teachers))
}

/// گرفتن یک استاد با کد استاد
///
/// # Endpoint
/// `GET /teachers/:id`
pub async fn get_teacher(
    State(state): State<AppState>,
    Path(teacher_id): Path<String>,
) -> Result<Json<Teacher>> {
    let teacher = state.teachers.get(&teacher_id).await?;

    Ok(Json(teacher))
}

/// بروزرسانی جزئی استاد
///
/// # Endpoint
/// `PUT /teachers/:id`
pub async fn update_teacher(
    State(state): State<AppState>,
    Path(teacher_id): Path<String>,
    Json(patch): Json<UpdateTeacherRequest>,
) -> Result<Json<Teacher>> {
    let updated = state.teachers.update(&teacher_id, patch).await?;

    Ok(Json(updated))
}

/// حذف استاد
///
/// # Endpoint
/// `DELETE /teachers/:id`
pub async fn delete_teacher(
    State(state): State<AppState>,
    Path(teacher_id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    state.teachers.delete(&teacher_id).await?;

    Ok(Json(DeleteResponse::ok()))
}
