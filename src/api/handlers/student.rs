//! # Student Handlers
//!
//! Handler‌های CRUD دانشجو

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    api::extractors::ValidatedJson,
    error::Result,
    models::{DeleteResponse, ListQuery, Student, UpdateStudentRequest},
    services::AppState,
};

// =====================================
// Create Student
// =====================================
/// ثبت دانشجوی جدید
///
/// # مفاهیم:
/// - `State<AppState>`: استخراج state از request
/// - `ValidatedJson<Student>`: parse و اجرای کامل جدول قوانین قبل از handler
/// - `impl IntoResponse`: هر نوعی که به response تبدیل بشه
///
/// # Endpoint
/// `POST /students/`
///
/// # Response
/// - 201 و رکورد ذخیره شده
/// - 422 اگه یکی از قوانین رد بشه (نام فیلد در details)
/// - 409 اگه شماره دانشجویی تکراری باشه
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(student): ValidatedJson<Student>,
) -> Result<impl IntoResponse> {
    let created = state.students.create(student).await?;

    // برگردوندن response با status 201 Created
    Ok((StatusCode::CREATED, Json(created)))
}

// =====================================
// List Students
// =====================================
/// لیست دانشجوها با صفحه‌بندی
///
/// # مفاهیم:
/// - `Query<ListQuery>`: استخراج پارامترهای query string
/// - offset پیش‌فرض 0، limit پیش‌فرض 100 و clamp به 100
///
/// # Endpoint
/// `GET /students/?offset=0&limit=100`
pub async fn list_students(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Student>>> {
    let students = state.students.list(&query).await?;

    Ok(Json(students))
}

// =====================================
// Get Student
// =====================================
/// گرفتن یک دانشجو با شماره دانشجویی
///
/// # مفاهیم:
/// - `Path<String>`: استخراج پارامتر از URL
///
/// # Endpoint
/// `GET /students/:id`
///
/// # Response
/// - 200 و رکورد
/// - 404 اگه پیدا نشه
pub async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<Student>> {
    let student = state.students.get(&student_id).await?;

    Ok(Json(student))
}

// =====================================
// Update Student
// =====================================
/// بروزرسانی جزئی دانشجو
///
/// # مفاهیم:
/// - بدنه یه patch پراکنده‌ست: فقط فیلدهای موجود بازنویسی میشن
/// - اعتبارسنجی روی رکورد ادغام شده انجام میشه، نه خود patch
///
/// # Endpoint
/// `PUT /students/:id`
///
/// # Response
/// - 200 و رکورد ادغام شده
/// - 404 اگه پیدا نشه
/// - 422 اگه رکورد ادغام شده یکی از قوانین رو رد کنه
pub async fn update_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Json(patch): Json<UpdateStudentRequest>,
) -> Result<Json<Student>> {
    let updated = state.students.update(&student_id, patch).await?;

    Ok(Json(updated))
}

// =====================================
// Delete Student
// =====================================
/// حذف دانشجو
///
/// # Endpoint
/// `DELETE /students/:id`
///
/// # Response
/// - 200 و `{"ok": true}`
/// - 404 اگه پیدا نشه (حذف دوباره همون کلید هم 404 هست)
pub async fn delete_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    state.students.delete(&student_id).await?;

    Ok(Json(DeleteResponse::ok()))
}
