//! # Custom Extractors
//!
//! Extractor‌های سفارشی برای استخراج داده از request
//!
//! ## مفاهیم Rust + Axum:
//! - **Extractors**: نوع‌هایی که از request داده استخراج میکنن
//! - **FromRequest**: trait برای extractor‌هایی که body میخونن
//! - **async_trait**: پشتیبانی از async در traits
//! - **Rejection**: نوع خطا برای extractors
//!
//! ## چطور کار میکنه؟
//! وقتی یه extractor به عنوان پارامتر handler تعریف میشه،
//! axum قبل از اجرای handler، extractor رو اجرا میکنه.

use axum::{
    async_trait,
    body::Body,
    extract::{rejection::JsonRejection, FromRequest},
    http::Request,
    Json,
};
use serde::de::DeserializeOwned;

use crate::{error::AppError, validation::Validate};

// =====================================
// JSON with Validation
// =====================================
/// استخراج JSON با اعتبارسنجی خودکار
///
/// # مفاهیم:
/// - اعتبارسنجی در سطح extractor: رکورد نامعتبر هیچوقت به handler نمیرسه
/// - JSON خراب خطای 400 میده، قانون رد شده خطای 422 با نام فیلد
///
/// # استفاده:
/// ```rust,ignore
/// async fn handler(ValidatedJson(student): ValidatedJson<Student>) -> ... {
///     // student از کل جدول قوانینش رد شده
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        // اول JSON رو parse کن
        let Json(record): Json<T> = Json::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| {
                AppError::BadRequest(format!("Invalid JSON: {e}"))
            })?;

        // بعد جدول قوانین رو اجرا کن
        record.validate()?;

        Ok(ValidatedJson(record))
    }
}
