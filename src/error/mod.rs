//! # ماژول مدیریت خطاها (Error Handling)
//!
//! این ماژول سیستم مدیریت خطای برنامه رو تعریف میکنه.
//!
//! ## مفاهیم Rust:
//! - **Custom Error Types**: تعریف نوع خطای سفارشی
//! - **thiserror**: derive macro برای Error trait
//! - **From Trait**: تبدیل خودکار نوع‌ها
//! - **Result Type Alias**: alias برای ساده‌تر شدن کد
//! - **Error Propagation**: انتشار خطا با `?`
//!
//! ## دو خطای اصلی این سرویس
//!
//! از دید کلاینت فقط دو اتفاق بد ممکنه بیفته:
//! - ورودی نامعتبر (422) با نام فیلد و پیام فارسی
//! - رکورد پیدا نشد (404) با پیام فارسی
//!
//! بقیه خطاها (دیتابیس، IO و غیره) خطای سرور هستن و به 500 تبدیل میشن.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

// =====================================
// Result Type Alias
// =====================================
/// نوع Result سفارشی برنامه
///
/// به جای نوشتن `Result<Student, AppError>` میتونیم بنویسیم `Result<Student>`
pub type Result<T, E = AppError> = std::result::Result<T, E>;

// =====================================
// Custom Error Enum
// =====================================
/// خطای اصلی برنامه
///
/// # مفاهیم:
/// - `enum`: نوع شمارشی با انواع مختلف خطا
/// - `#[derive(Error)]`: از thiserror برای پیاده‌سازی Error trait
/// - `#[error("...")]`: پیام خطا برای هر نوع
/// - `#[from]`: تبدیل خودکار از نوع‌های دیگه
#[derive(Debug, Error)]
pub enum AppError {
    // ----------------------------------------
    // خطاهای کاربر (4xx)
    // ----------------------------------------

    /// درخواست نامعتبر - 400
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// پیدا نشد - 404
    #[error("{0}")]
    NotFound(String),

    /// تکراری - 409
    #[error("{0}")]
    Conflict(String),

    /// خطای اعتبارسنجی - 422
    /// نام فیلد و پیام فارسی اولین قانونی که رد شده
    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    // ----------------------------------------
    // خطاهای سرور (5xx)
    // ----------------------------------------

    /// خطای داخلی سرور - 500
    #[error("Internal server error: {0}")]
    Internal(String),

    /// خطای سرور
    #[error("Server error: {0}")]
    Server(String),

    /// خطای تنظیمات
    #[error("Configuration error: {0}")]
    Config(String),

    // ----------------------------------------
    // خطاهای تبدیل شده از کتابخانه‌ها
    // ----------------------------------------

    /// خطای دیتابیس
    /// `#[from]` یعنی sqlx::Error خودکار به این تبدیل میشه
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// خطای IO
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// خطای JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// ساخت خطای اعتبارسنجی برای یک فیلد مشخص
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// گرفتن HTTP status code متناسب با خطا
    ///
    /// # مفاهیم:
    /// - `match`: pattern matching
    /// - `Self::Variant`: مراجعه به variant‌ها
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 4xx Client Errors
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,

            // 5xx Server Errors
            Self::Internal(_)
            | Self::Server(_)
            | Self::Config(_)
            | Self::Database(_)
            | Self::Io(_)
            | Self::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// آیا این یه خطای سرور هست؟
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

// =====================================
// Error Response DTO
// =====================================
/// ساختار پاسخ خطا در API
///
/// # مفاهیم:
/// - DTO (Data Transfer Object): برای ارسال به کلاینت
/// - `Serialize`: تبدیل به JSON
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// کد خطا (مثلا "NOT_FOUND")
    pub error: String,

    /// پیام خطا
    pub message: String,

    /// کد وضعیت HTTP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,

    /// جزئیات اضافی (اختیاری)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// ساخت پاسخ خطای جدید
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status_code: None,
            details: None,
        }
    }

    /// اضافه کردن کد وضعیت
    #[must_use]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status_code = Some(status.as_u16());
        self
    }

    /// اضافه کردن جزئیات
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

// =====================================
// IntoResponse Implementation
// =====================================
/// تبدیل AppError به Response HTTP
///
/// # مفاهیم:
/// - `IntoResponse`: trait خاص axum برای تبدیل به response
/// - این باعث میشه بتونیم AppError رو مستقیم از handler برگردونیم
///
/// # مثال
/// ```rust,ignore
/// async fn handler() -> Result<Json<Data>, AppError> {
///     // اگه Err برگرده، خودکار به response تبدیل میشه
///     Ok(Json(data))
/// }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // لاگ کردن خطاهای سرور
        if self.is_server_error() {
            error!(error = %self, "Server error occurred");
        }

        let status = self.status_code();

        let mut error_response = ErrorResponse::new(
            status.canonical_reason().unwrap_or("Error"),
            self.to_string(),
        )
        .with_status(status);

        // برای خطای اعتبارسنجی، نام فیلد رد شده هم به کلاینت میرسه
        if let Self::Validation { field, message } = &self {
            error_response = ErrorResponse::new(
                status.canonical_reason().unwrap_or("Error"),
                message.clone(),
            )
            .with_status(status)
            .with_details(serde_json::json!({ "field": field }));
        }

        // برگردوندن tuple که axum بلده تبدیل کنه
        (status, Json(error_response)).into_response()
    }
}

// =====================================
// From Implementations
// =====================================
// این‌ها برای تبدیل خودکار خطاهای دیگه به AppError هستن
// با `?` میتونیم خطا رو propagate کنیم

impl From<String> for AppError {
    fn from(s: String) -> Self {
        AppError::Internal(s)
    }
}

impl From<&str> for AppError {
    fn from(s: &str) -> Self {
        AppError::Internal(s.to_string())
    }
}

// =====================================
// Option Extensions
// =====================================
/// Extension trait برای Option
///
/// # مفاهیم:
/// - Extension Trait: اضافه کردن متد به نوع‌های موجود
pub trait OptionExt<T> {
    /// تبدیل None به AppError::NotFound
    fn ok_or_not_found(self, message: impl Into<String>) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, message: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| AppError::NotFound(message.into()))
    }
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::NotFound("test".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );

        assert_eq!(
            AppError::Conflict("test".to_string()).status_code(),
            StatusCode::CONFLICT
        );

        assert_eq!(
            AppError::validation("first_name", "پیام").status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );

        assert_eq!(
            AppError::Internal("test".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_response() {
        let response = ErrorResponse::new("NOT_FOUND", "Resource not found")
            .with_status(StatusCode::NOT_FOUND);

        assert_eq!(response.status_code, Some(404));
    }

    #[test]
    fn test_validation_error_message() {
        let err = AppError::validation("birth_date", "فرمت تاریخ نامعتبر است");
        assert_eq!(err.to_string(), "birth_date: فرمت تاریخ نامعتبر است");
    }

    #[test]
    fn test_option_extension() {
        let some_value: Option<i32> = Some(42);
        let none_value: Option<i32> = None;

        assert!(some_value.ok_or_not_found("not found").is_ok());
        assert!(none_value.ok_or_not_found("not found").is_err());
    }
}
