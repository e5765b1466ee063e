//! # Middleware
//!
//! Middleware‌های سفارشی برای پردازش request/response
//!
//! ## مفاهیم:
//! - **Middleware**: کد که قبل/بعد از handler اجرا میشه
//! - **Tower**: کتابخانه middleware در اکوسیستم Rust
//! - **Layer**: wrapper برای اضافه کردن middleware
//! - **Next**: ادامه زنجیره middleware

use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::IntoResponse,
};
use std::time::Instant;
use tracing::info;

// =====================================
// Request Timing Middleware
// =====================================
/// اندازه‌گیری زمان پردازش request
///
/// # مفاهیم:
/// - `async fn` middleware
/// - `Instant`: اندازه‌گیری زمان
///
/// # استفاده:
/// ```rust,ignore
/// let app = Router::new()
///     .layer(axum::middleware::from_fn(request_timing));
/// ```
pub async fn request_timing(
    request: Request<Body>,
    next: Next,
) -> impl IntoResponse {
    let method = request.method().clone();
    let uri = request.uri().clone();

    // شروع تایمر
    let start = Instant::now();

    // اجرای بقیه زنجیره
    let response = next.run(request).await;

    // محاسبه زمان
    let duration = start.elapsed();

    // لاگ کردن
    info!(
        method = %method,
        uri = %uri,
        status = %response.status(),
        duration_ms = %duration.as_millis(),
        "Request completed"
    );

    response
}

// =====================================
// Request ID Middleware
// =====================================
/// اضافه کردن Request ID به هر request
///
/// # مفاهیم:
/// - تولید ID یکتا برای هر request
/// - اضافه کردن به response header
/// - مفید برای debugging و tracing
pub async fn request_id(
    mut request: Request<Body>,
    next: Next,
) -> impl IntoResponse {
    use axum::http::header::HeaderValue;

    // تولید یا استفاده از request ID موجود
    let request_id = request
        .headers()
        .get("X-Request-Id")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
        .unwrap_or_else(|| nanoid::nanoid!(12));

    // nanoid فقط کاراکتر ASCII تولید میکنه، پس این تبدیل شکست نمیخوره
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        request.headers_mut().insert("X-Request-Id", value);
    }

    // اجرای بقیه
    let mut response = next.run(request).await;

    // اضافه کردن به response
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert("X-Request-Id", value);
    }

    response
}
