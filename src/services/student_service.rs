//! # سرویس دانشجو
//!
//! منطق کسب‌وکار مربوط به دانشجوها
//!
//! ## مفاهیم Rust:
//! - Business Logic: قوانین برنامه اینجا پیاده‌سازی میشن
//! - Separation of Concerns: جداسازی از لایه داده
//! - Error Handling: مدیریت خطا در سطح business

use tracing::{info, instrument};

use crate::{
    database::{Repository, StudentRepository},
    error::{AppError, OptionExt, Result},
    models::{ListQuery, Student, UpdateStudentRequest},
    validation::Validate,
};

/// پیام not-found این سرویس
const NOT_FOUND_MESSAGE: &str = "دانشجو یافت نشد";

// =====================================
// Student Service
// =====================================
/// سرویس مدیریت دانشجوها
///
/// # مسئولیت‌ها:
/// - اعتبارسنجی رکورد قبل از هر نوشتن
/// - چک تکراری نبودن شماره دانشجویی
/// - ادغام patch و اعتبارسنجی دوباره رکورد ادغام شده
/// - ترجمه نبودن رکورد به خطای not-found
#[derive(Debug, Clone)]
pub struct StudentService {
    repo: StudentRepository,
}

impl StudentService {
    /// ساخت سرویس جدید
    #[must_use]
    pub fn new(repo: StudentRepository) -> Self {
        Self { repo }
    }

    /// ثبت دانشجوی جدید
    ///
    /// # مفاهیم:
    /// - `#[instrument]`: macro برای tracing خودکار
    /// - `skip(self, student)`: از لاگ کردن کل رکورد صرفنظر کن
    ///
    /// # Errors
    /// - `Validation`: اولین فیلدی که قانونش رد بشه
    /// - `Conflict`: شماره دانشجویی تکراری
    #[instrument(skip(self, student), fields(student_id = %student.student_id))]
    pub async fn create(&self, student: Student) -> Result<Student> {
        // Step 1: اجرای کامل جدول قوانین
        student.validate()?;

        // Step 2: بررسی تکراری نبودن کلید
        if self.repo.exists(&student.student_id).await? {
            return Err(AppError::Conflict(
                "دانشجویی با این شماره دانشجویی قبلا ثبت شده است".to_string(),
            ));
        }

        // Step 3: ذخیره در دیتابیس
        let created = self.repo.insert(&student).await?;

        info!(student_id = %created.student_id, "Created student");
        Ok(created)
    }

    /// لیست دانشجوها با صفحه‌بندی offset/limit
    pub async fn list(&self, query: &ListQuery) -> Result<Vec<Student>> {
        self.repo.list(query.offset(), query.limit()).await
    }

    /// گرفتن یک دانشجو با شماره دانشجویی
    #[instrument(skip(self))]
    pub async fn get(&self, student_id: &str) -> Result<Student> {
        self.repo
            .find_by_id(student_id)
            .await?
            .ok_or_not_found(NOT_FOUND_MESSAGE)
    }

    /// بروزرسانی جزئی: لود، ادغام فیلد به فیلد، اعتبارسنجی دوباره، ذخیره
    ///
    /// رکورد ادغام شده از اول اعتبارسنجی میشه؛ یعنی patch‌ای که دانشکده
    /// رو عوض کنه ولی رشته ناسازگار بمونه رد میشه.
    #[instrument(skip(self, patch))]
    pub async fn update(
        &self,
        student_id: &str,
        patch: UpdateStudentRequest,
    ) -> Result<Student> {
        // لود رکورد فعلی - نبودنش یعنی not-found
        let current = self
            .repo
            .find_by_id(student_id)
            .await?
            .ok_or_not_found(NOT_FOUND_MESSAGE)?;

        // ادغام و اعتبارسنجی دوباره
        let merged = patch.apply_to(current);
        merged.validate()?;

        let updated = self.repo.update(&merged).await?;

        info!(student_id = %student_id, "Updated student");
        Ok(updated)
    }

    /// حذف دانشجو - کلید غایب خطاست، نه موفقیت بی‌اثر
    #[instrument(skip(self))]
    pub async fn delete(&self, student_id: &str) -> Result<()> {
        if !self.repo.delete(student_id).await? {
            return Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }

        info!(student_id = %student_id, "Deleted student");
        Ok(())
    }
}
