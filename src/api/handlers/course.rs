//! # Course Handlers
//!
//! Handler‌های CRUD درس

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    api::extractors::ValidatedJson,
    error::Result,
    models::{Course, DeleteResponse, ListQuery, UpdateCourseRequest},
    services::AppState,
};

/// ثبت درس جدید
///
/// # Endpoint
/// `POST /courses/`
pub async fn create_course(
    State(state): State<AppState>,
    ValidatedJson(course): ValidatedJson<Course>,
) -> Result<impl IntoResponse> {
    let created = state.courses.create(course).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// لیست درس‌ها با صفحه‌بندی
///
/// # Endpoint
/// `GET /courses/?offset=0&limit=100`
pub async fn list_courses(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Course>>> {
    let courses = state.courses.list(&query).await?;

    Ok(Json(courses))
}

/// گرفتن یک درس با کد درس
///
/// # Endpoint
/// `GET /courses/:id`
pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<Course>> {
    let course = state.courses.get(&course_id).await?;

    Ok(Json(course))
}

/// بروزرسانی جزئی درس
///
/// # Endpoint
/// `PUT /courses/:id`
pub async fn update_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    Json(patch): Json<UpdateCourseRequest>,
) -> Result<Json<Course>> {
    let updated = state.courses.update(&course_id, patch).await?;

    Ok(Json(updated))
}

/// حذف درس
///
/// # Endpoint
/// `DELETE /courses/:id`
pub async fn delete_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    state.courses.delete(&course_id).await?;

    Ok(Json(DeleteResponse::ok()))
}
