//! # سرویس درس
//!
//! منطق کسب‌وکار مربوط به درس‌ها

use tracing::{info, instrument};

use crate::{
    database::{CourseRepository, Repository},
    error::{AppError, OptionExt, Result},
    models::{Course, ListQuery, UpdateCourseRequest},
    validation::Validate,
};

/// پیام not-found این سرویس
const NOT_FOUND_MESSAGE: &str = "درس یافت نشد";

// =====================================
// Course Service
// =====================================
/// سرویس مدیریت درس‌ها
#[derive(Debug, Clone)]
pub struct CourseService {
    repo: CourseRepository,
}

impl CourseService {
    /// ساخت سرویس جدید
    #[must_use]
    pub fn new(repo: CourseRepository) -> Self {
        Self { repo }
    }

    /// ثبت درس جدید
    ///
    /// # Errors
    /// - `Validation`: اولین فیلدی که قانونش رد بشه
    /// - `Conflict`: کد درس تکراری
    #[instrument(skip(self, course), fields(course_id = %course.course_id))]
    pub async fn create(&self, course: Course) -> Result<Course> {
        course.validate()?;

        if self.repo.exists(&course.course_id).await? {
            return Err(AppError::Conflict(
                "درسی با این کد قبلا ثبت شده است".to_string(),
            ));
        }

        let created = self.repo.insert(&course).await?;

        info!(course_id = %created.course_id, "Created course");
        Ok(created)
    }

    /// لیست درس‌ها با صفحه‌بندی offset/limit
    pub async fn list(&self, query: &ListQuery) -> Result<Vec<Course>> {
        self.repo.list(query.offset(), query.limit()).await
    }

    /// گرفتن یک درس با کد درس
    #[instrument(skip(self))]
    pub async fn get(&self, course_id: &str) -> Result<Course> {
        self.repo
            .find_by_id(course_id)
            .await?
            .ok_or_not_found(NOT_FOUND_MESSAGE)
    }

    /// بروزرسانی جزئی: لود، ادغام، اعتبارسنجی دوباره، ذخیره
    #[instrument(skip(self, patch))]
    pub async fn update(&self, course_id: &str, patch: UpdateCourseRequest) -> Result<Course> {
        let current = self
            .repo
            .find_by_id(course_id)
            .await?
            .ok_or_not_found(NOT_FOUND_MESSAGE)?;

        let merged = patch.apply_to(current);
        merged.validate()?;

        let updated = self.repo.update(&merged).await?;

        info!(course_id = %course_id, "Updated course");
        Ok(updated)
    }

    /// حذف درس - کلید غایب خطاست
    #[instrument(skip(self))]
    pub async fn delete(&self, course_id: &str) -> Result<()> {
        if !self.repo.delete(course_id).await? {
            return Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }

        info!(course_id = %course_id, "Deleted course");
        Ok(())
    }
}
