//! # Repository Pattern
//!
//! این فایل الگوی Repository رو پیاده‌سازی میکنه.
//!
//! ## Repository Pattern چیه؟
//! یه لایه انتزاعی بین منطق برنامه و دیتابیس.
//! - منطق برنامه نمیدونه داده کجا ذخیره میشه
//! - تست کردن راحت‌تر میشه
//! - تغییر دیتابیس آسون‌تر میشه
//!
//! ## مفاهیم Rust:
//! - **Traits**: تعریف interface
//! - **async_trait**: امکان async در traits
//! - **Associated Types**: نوع‌های مرتبط با trait
//!
//! هر سه entity یک شکل CRUD دارن، پس یک trait مشترک کفایت میکنه؛
//! query‌ها به خاطر ستون‌های متفاوت per-entity نوشته شدن.

use async_trait::async_trait;

use super::Database;
use crate::error::Result;
use crate::models::{Course, Student, Teacher};

// =====================================
// Base Repository Trait
// =====================================
/// Trait پایه برای همه Repository‌ها
///
/// # مفاهیم:
/// - `#[async_trait]`: macro برای async در traits
/// - `Send + Sync`: امکان ارسال بین threads
/// - Associated Types: `type Entity` و `type Id`
#[async_trait]
pub trait Repository: Send + Sync {
    /// نوع Entity که این repository باهاش کار میکنه
    type Entity: Send + Sync;

    /// نوع شناسه (ID)
    type Id: Send + Sync + ?Sized;

    /// پیدا کردن با کلید اصلی - `None` یعنی رکوردی نیست
    async fn find_by_id(&self, id: &Self::Id) -> Result<Option<Self::Entity>>;

    /// لیست‌گیری با offset/limit و ترتیب پایدار روی کلید اصلی
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Self::Entity>>;

    /// درج رکورد جدید - کلید تکراری خطای دیتابیس میده
    async fn insert(&self, entity: &Self::Entity) -> Result<Self::Entity>;

    /// بازنویسی کامل رکورد ادغام شده (همه ستون‌ها جز کلید)
    async fn update(&self, entity: &Self::Entity) -> Result<Self::Entity>;

    /// حذف با کلید - `false` یعنی رکوردی نبود
    async fn delete(&self, id: &Self::Id) -> Result<bool>;

    /// چک کردن وجود کلید
    async fn exists(&self, id: &Self::Id) -> Result<bool>;

    /// شمارش کل
    async fn count(&self) -> Result<i64>;
}

// =====================================
// Student Repository
// =====================================
/// Repository برای مدیریت دانشجوها
///
/// # مفاهیم:
/// - Struct با dependency injection
/// - Database به عنوان dependency تزریق میشه
#[derive(Debug, Clone)]
pub struct StudentRepository {
    db: Database,
}

/// ستون‌های جدول دانشجو - به ترتیب فیلدهای struct
const STUDENT_COLUMNS: &str = "student_id, first_name, last_name, father_name, birth_date, \
     birth_city, address, postal_code, mobile_phone, home_phone, \
     id_serial_number, id_serial_letter, id_serial_code, department, major, \
     marital_status, national_id";

impl StudentRepository {
    /// ساخت repository جدید
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository for StudentRepository {
    type Entity = Student;
    type Id = str;

    async fn find_by_id(&self, id: &str) -> Result<Option<Student>> {
        let student = sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE student_id = ?"
        ))
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(student)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Student>> {
        let students = sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students ORDER BY student_id LIMIT ? OFFSET ?"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(self.db.pool())
        .await?;

        Ok(students)
    }

    async fn insert(&self, entity: &Student) -> Result<Student> {
        sqlx::query(&format!(
            "INSERT INTO students ({STUDENT_COLUMNS}) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
        ))
        .bind(&entity.student_id)
        .bind(&entity.first_name)
        .bind(&entity.last_name)
        .bind(&entity.father_name)
        .bind(&entity.birth_date)
        .bind(&entity.birth_city)
        .bind(&entity.address)
        .bind(&entity.postal_code)
        .bind(&entity.mobile_phone)
        .bind(&entity.home_phone)
        .bind(&entity.id_serial_number)
        .bind(&entity.id_serial_letter)
        .bind(&entity.id_serial_code)
        .bind(&entity.department)
        .bind(&entity.major)
        .bind(&entity.marital_status)
        .bind(&entity.national_id)
        .execute(self.db.pool())
        .await?;

        // خوندن رکورد ذخیره شده
        self.find_by_id(&entity.student_id)
            .await?
            .ok_or_else(|| crate::error::AppError::Internal("Failed to create student".to_string()))
    }

    async fn update(&self, entity: &Student) -> Result<Student> {
        sqlx::query(
            "UPDATE students SET \
             first_name = ?, last_name = ?, father_name = ?, birth_date = ?, \
             birth_city = ?, address = ?, postal_code = ?, mobile_phone = ?, \
             home_phone = ?, id_serial_number = ?, id_serial_letter = ?, \
             id_serial_code = ?, department = ?, major = ?, marital_status = ?, \
             national_id = ? \
             WHERE student_id = ?",
        )
        .bind(&entity.first_name)
        .bind(&entity.last_name)
        .bind(&entity.father_name)
        .bind(&entity.birth_date)
        .bind(&entity.birth_city)
        .bind(&entity.address)
        .bind(&entity.postal_code)
        .bind(&entity.mobile_phone)
        .bind(&entity.home_phone)
        .bind(&entity.id_serial_number)
        .bind(&entity.id_serial_letter)
        .bind(&entity.id_serial_code)
        .bind(&entity.department)
        .bind(&entity.major)
        .bind(&entity.marital_status)
        .bind(&entity.national_id)
        .bind(&entity.student_id)
        .execute(self.db.pool())
        .await?;

        self.find_by_id(&entity.student_id)
            .await?
            .ok_or_else(|| crate::error::AppError::Internal("Failed to update student".to_string()))
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM students WHERE student_id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists(&self, id: &str) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i32>(
            "SELECT COUNT(*) FROM students WHERE student_id = ?"
        )
        .bind(id)
        .fetch_one(self.db.pool())
        .await?;

        Ok(count > 0)
    }

    async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students")
            .fetch_one(self.db.pool())
            .await?;

        Ok(count)
    }
}

// =====================================
// Teacher Repository
// =====================================
/// Repository برای مدیریت اساتید
#[derive(Debug, Clone)]
pub struct TeacherRepository {
    db: Database,
}

/// ستون‌های جدول استاد
const TEACHER_COLUMNS: &str = "teacher_id, first_name, last_name, birth_date, birth_city, \
     address, postal_code, mobile_phone, home_phone, national_id, department, major";

impl TeacherRepository {
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository for TeacherRepository {
    type Entity = Teacher;
    type Id = str;

    async fn find_by_id(&self, id: &str) -> Result<Option<Teacher>> {
        let teacher = sqlx::query_as::<_, Teacher>(&format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers WHERE teacher_id = ?"
        ))
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(teacher)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Teacher>> {
        let teachers = sqlx::query_as::<_, Teacher>(&format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers ORDER BY teacher_id LIMIT ? OFFSET ?"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(self.db.pool())
        .await?;

        Ok(teachers)
    }

    async fn insert(&self, entity: &Teacher) -> Result<Teacher> {
        sqlx::query(&format!(
            "INSERT INTO teachers ({TEACHER_COLUMNS}) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
        ))
        .bind(&entity.teacher_id)
        .bind(&entity.first_name)
        .bind(&entity.last_name)
        .bind(&entity.birth_date)
        .bind(&entity.birth_city)
        .bind(&entity.address)
        .bind(&entity.postal_code)
        .bind(&entity.mobile_phone)
        .bind(&entity.home_phone)
        .bind(&entity.national_id)
        .bind(&entity.department)
        .bind(&entity.major)
        .execute(self.db.pool())
        .await?;

        self.find_by_id(&entity.teacher_id)
            .await?
            .ok_or_else(|| crate::error::AppError::Internal("Failed to create teacher".to_string()))
    }

    async fn update(&self, entity: &Teacher) -> Result<Teacher> {
        sqlx::query(
            "UPDATE teachers SET \
             first_name = ?, last_name = ?, birth_date = ?, birth_city = ?, \
             address = ?, postal_code = ?, mobile_phone = ?, home_phone = ?, \
             national_id = ?, department = ?, major = ? \
             WHERE teacher_id = ?",
        )
        .bind(&entity.first_name)
        .bind(&entity.last_name)
        .bind(&entity.birth_date)
        .bind(&entity.birth_city)
        .bind(&entity.address)
        .bind(&entity.postal_code)
        .bind(&entity.mobile_phone)
        .bind(&entity.home_phone)
        .bind(&entity.national_id)
        .bind(&entity.department)
        .bind(&entity.major)
        .bind(&entity.teacher_id)
        .execute(self.db.pool())
        .await?;

        self.find_by_id(&entity.teacher_id)
            .await?
            .ok_or_else(|| crate::error::AppError::Internal("Failed to update teacher".to_string()))
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM teachers WHERE teacher_id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists(&self, id: &str) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i32>(
            "SELECT COUNT(*) FROM teachers WHERE teacher_id = ?"
        )
        .bind(id)
        .fetch_one(self.db.pool())
        .await?;

        Ok(count > 0)
    }

    async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM teachers")
            .fetch_one(self.db.pool())
            .await?;

        Ok(count)
    }
}

// =====================================
// Course Repository
// =====================================
/// Repository برای مدیریت درس‌ها
#[derive(Debug, Clone)]
pub struct CourseRepository {
    db: Database,
}

/// ستون‌های جدول درس
const COURSE_COLUMNS: &str = "course_id, course_name, department, credit";

impl CourseRepository {
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository for CourseRepository {
    type Entity = Course;
    type Id = str;

    async fn find_by_id(&self, id: &str) -> Result<Option<Course>> {
        let course = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE course_id = ?"
        ))
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(course)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Course>> {
        let courses = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses ORDER BY course_id LIMIT ? OFFSET ?"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(self.db.pool())
        .await?;

        Ok(courses)
    }

    async fn insert(&self, entity: &Course) -> Result<Course> {
        sqlx::query(&format!(
            "INSERT INTO courses ({COURSE_COLUMNS}) VALUES (?, ?, ?, ?)"
        ))
        .bind(&entity.course_id)
        .bind(&entity.course_name)
        .bind(&entity.department)
        .bind(entity.credit)
        .execute(self.db.pool())
        .await?;

        self.find_by_id(&entity.course_id)
            .await?
            .ok_or_else(|| crate::error::AppError::Internal("Failed to create course".to_string()))
    }

    async fn update(&self, entity: &Course) -> Result<Course> {
        sqlx::query(
            "UPDATE courses SET course_name = ?, department = ?, credit = ? \
             WHERE course_id = ?",
        )
        .bind(&entity.course_name)
        .bind(&entity.department)
        .bind(entity.credit)
        .bind(&entity.course_id)
        .execute(self.db.pool())
        .await?;

        self.find_by_id(&entity.course_id)
            .await?
            .ok_or_else(|| crate::error::AppError::Internal("Failed to update course".to_string()))
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM courses WHERE course_id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists(&self, id: &str) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i32>(
            "SELECT COUNT(*) FROM courses WHERE course_id = ?"
        )
        .bind(id)
        .fetch_one(self.db.pool())
        .await?;

        Ok(count > 0)
    }

    async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses")
            .fetch_one(self.db.pool())
            .await?;

        Ok(count)
    }
}
