//! # سرویس استاد
//!
//! منطق کسب‌وکار مربوط به اساتید - همون چرخه‌ی سرویس دانشجو:
//! اعتبارسنجی، چک تکراری نبودن کلید، ادغام patch و ترجمه not-found

use tracing::{info, instrument};

use crate::{
    database::{Repository, TeacherRepository},
    error::{AppError, OptionExt, Result},
    models::{ListQuery, Teacher, UpdateTeacherRequest},
    validation::Validate,
};

/// پیام not-found این سرویس
const NOT_FOUND_MESSAGE: &str = "استاد یافت نشد";

// =====================================
// Teacher Service
// =====================================
/// سرویس مدیریت اساتید
#[derive(Debug, Clone)]
pub struct TeacherService {
    repo: TeacherRepository,
}

impl TeacherService {
    /// ساخت سرویس جدید
    #[must_use]
    pub fn new(repo: TeacherRepository) -> Self {
        Self { repo }
    }

    /// ثبت استاد جدید
    ///
    /// # Errors
    /// - `Validation`: اولین فیلدی که قانونش رد بشه
    /// - `Conflict`: کد استاد تکراری
    #[instrument(skip(self, teacher), fields(teacher_id = %teacher.teacher_id))]
    pub async fn create(&self, teacher: Teacher) -> Result<Teacher> {
        teacher.validate()?;

        if self.repo.exists(&teacher.teacher_id).await? {
            return Err(AppError::Conflict(
                "استادی با این کد قبلا ثبت شده است".to_string(),
            ));
        }

        let created = self.repo.insert(&teacher).await?;

        info!(teacher_id = %created.teacher_id, "Created teacher");
        Ok(created)
    }

    /// لیست اساتید با صفحه‌بندی offset/limit
    pub async fn list(&self, query: &ListQuery) -> Result<Vec<Teacher>> {
        self.repo.list(query.offset(), query.limit()).await
    }

    /// گرفتن یک استاد با کد استاد
    #[instrument(skip(self))]
    pub async fn get(&self, teacher_id: &str) -> Result<Teacher> {
        self.repo
            .find_by_id(teacher_id)
            .await?
            .ok_or_not_found(NOT_FOUND_MESSAGE)
    }

    /// بروزرسانی جزئی: لود، ادغام، اعتبارسنجی دوباره، ذخیره
    #[instrument(skip(self, patch))]
    pub async fn update(
        &self,
        teacher_id: &str,
        patch: UpdateTeacherRequest,
    ) -> Result<Teacher> {
        let current = self
            .repo
            .find_by_id(teacher_id)
            .await?
            .ok_or_not_found(NOT_FOUND_MESSAGE)?;

        let merged = patch.apply_to(current);
        merged.validate()?;

        let updated = self.repo.update(&merged).await?;

        info!(teacher_id = %teacher_id, "Updated teacher");
        Ok(updated)
    }

    /// حذف استاد - کلید غایب خطاست
    #[instrument(skip(self))]
    pub async fn delete(&self, teacher_id: &str) -> Result<()> {
        if !self.repo.delete(teacher_id).await? {
            return Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }

        info!(teacher_id = %teacher_id, "Deleted teacher");
        Ok(())
    }
}
