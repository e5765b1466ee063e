//! # ماژول سرویس‌ها (Business Logic Layer)
//!
//! این ماژول منطق کسب‌وکار برنامه رو پیاده‌سازی میکنه.
//!
//! ## لایه‌بندی معماری
//!
//! ```text
//! ┌─────────────────┐
//! │    API Layer    │  <-- HTTP handlers (axum)
//! ├─────────────────┤
//! │  Service Layer  │  <-- Business logic (اینجا!)
//! ├─────────────────┤
//! │ Repository Layer│  <-- Data access
//! ├─────────────────┤
//! │    Database     │  <-- SQLite
//! └─────────────────┘
//! ```
//!
//! ## مفاهیم Rust:
//! - **Dependency Injection**: تزریق وابستگی‌ها
//! - **Arc<T>**: اشتراک امن بین threads
//! - **async/await**: عملیات غیرهمزمان

mod student_service;
mod teacher_service;
mod course_service;

pub use student_service::*;
pub use teacher_service::*;
pub use course_service::*;

use std::sync::Arc;
use crate::{
    config::Config,
    database::{CourseRepository, Database, StudentRepository, TeacherRepository},
};

// =====================================
// Application State
// =====================================
/// وضعیت برنامه که بین همه handlers اشتراک‌گذاری میشه
///
/// # مفاهیم:
/// - `Arc<T>`: Reference counting برای thread-safe sharing
/// - `Clone`: کپی کردن (فقط Arc clone میشه، نه داده)
/// - این state در axum به handler‌ها تزریق میشه
#[derive(Clone)]
pub struct AppState {
    /// تنظیمات برنامه
    pub config: Arc<Config>,

    /// اتصال دیتابیس - برای health check
    pub database: Database,

    /// سرویس دانشجوها
    pub students: Arc<StudentService>,

    /// سرویس اساتید
    pub teachers: Arc<TeacherService>,

    /// سرویس درس‌ها
    pub courses: Arc<CourseService>,
}

impl AppState {
    /// ساخت AppState جدید
    ///
    /// # مفاهیم:
    /// - Factory method: ساخت object پیچیده
    /// - Dependency Injection: همه وابستگی‌ها تزریق میشن
    #[must_use]
    pub fn new(db: Database, config: Config) -> Self {
        // ساخت repositories
        let student_repo = StudentRepository::new(db.clone());
        let teacher_repo = TeacherRepository::new(db.clone());
        let course_repo = CourseRepository::new(db.clone());

        // ساخت services
        let students = Arc::new(StudentService::new(student_repo));
        let teachers = Arc::new(TeacherService::new(teacher_repo));
        let courses = Arc::new(CourseService::new(course_repo));

        Self {
            config: Arc::new(config),
            database: db,
            students,
            teachers,
            courses,
        }
    }

    /// دسترسی به config
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}
