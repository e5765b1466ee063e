//! # لایه API
//!
//! تعریف مسیرها و اتصال‌شون به handler‌ها. هر resource یه زیر-router
//! پنج‌عملیاته داره که زیر مسیر خودش nest میشه؛ state مشترک (سرویس‌ها
//! به اضافه دیتابیس برای health check) یک بار ساخته و به همه تزریق میشه.
//! middleware‌ها هم همینجا سوار میشن تا هر سه resource یکسان لاگ و
//! timeout و CORS بگیرن.
//!
//! ## جدول مسیرها:
//! هر سه resource همین پنج عملیات رو دارن:
//! - `POST /students/` - ثبت دانشجو
//! - `GET /students/` - لیست دانشجوها (offset/limit)
//! - `GET /students/:id` - یک دانشجو
//! - `PUT /students/:id` - بروزرسانی جزئی
//! - `DELETE /students/:id` - حذف
//! - همین مسیرها برای `/teachers/` و `/courses/`
//! - `GET /health` - Health check

mod handlers;
mod middleware;
mod extractors;

pub use handlers::*;
pub use middleware::*;
pub use extractors::*;

use axum::{
    routing::get,
    Router,
    middleware as axum_middleware,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    timeout::TimeoutLayer,
    compression::CompressionLayer,
};
use std::time::Duration;

use crate::{
    config::Config,
    database::Database,
    services::AppState,
};

// =====================================
// Router Builder
// =====================================
/// ساخت Router اصلی برنامه
///
/// # مفاهیم:
/// - `Router::new()`: شروع router خالی
/// - `.nest()`: گروه‌بندی route‌ها
/// - `.layer()`: اضافه کردن middleware
/// - `.with_state()`: تزریق state
///
/// # Arguments
/// * `db` - اتصال دیتابیس
/// * `config` - تنظیمات برنامه
pub fn create_router(db: Database, config: Config) -> Router {
    // ساخت AppState
    let state = AppState::new(db, config);

    // ساخت router با گروه‌بندی per-resource
    Router::new()
        // سه خانواده resource، هر کدوم پنج عملیات
        .merge(student_routes())
        .merge(teacher_routes())
        .merge(course_routes())

        // Health check
        .route("/health", get(handlers::health::health_check))

        // Middleware‌های سفارشی - request ID و زمان پردازش
        .layer(axum_middleware::from_fn(middleware::request_id))
        .layer(axum_middleware::from_fn(middleware::request_timing))

        // Middleware‌های عمومی
        .layer(
            ServiceBuilder::new()
                // Tracing - لاگ کردن request‌ها
                .layer(TraceLayer::new_for_http())

                // Timeout - حداکثر زمان پردازش
                .layer(TimeoutLayer::new(Duration::from_secs(30)))

                // Compression - فشرده‌سازی response
                .layer(CompressionLayer::new())

                // CORS - اجازه دسترسی از دامنه‌های دیگه
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any)
                )
        )

        // تزریق state به همه handlers
        .with_state(state)
}

/// Route‌های دانشجو
///
/// # مفاهیم:
/// - Nested routing: گروه‌بندی route‌ها
/// - RESTful design: طراحی REST
fn student_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/students/",
            get(handlers::student::list_students).post(handlers::student::create_student),
        )
        .route(
            "/students/:id",
            get(handlers::student::get_student)
                .put(handlers::student::update_student)
                .delete(handlers::student::delete_student),
        )
}

/// Route‌های استاد
fn teacher_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/teachers/",
            get(handlers::teacher::list_teachers).post(handlers::teacher::create_teacher),
        )
        .route(
            "/teachers/:id",
            get(handlers::teacher::get_teacher)
                .put(handlers::teacher::update_teacher)
                .delete(handlers::teacher::delete_teacher),
        )
}

/// Route‌های درس
fn course_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/courses/",
            get(handlers::course::list_courses).post(handlers::course::create_course),
        )
        .route(
            "/courses/:id",
            get(handlers::course::get_course)
                .put(handlers::course::update_course)
                .delete(handlers::course::delete_course),
        )
}
