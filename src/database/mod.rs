//! # ماژول دیتابیس (Database Layer)
//!
//! این ماژول لایه ارتباط با دیتابیس رو مدیریت میکنه.
//!
//! ## مفاهیم Rust:
//! - **Arc<T>**: Reference Counting برای اشتراک داده بین threads
//! - **async/await**: برنامه‌نویسی غیرهمزمان
//! - **Connection Pool**: هر درخواست یک اتصال از pool قرض میگیره و
//!   در پایان، موفق یا ناموفق، خودکار پس میده
//!
//! ## الگوهای طراحی:
//! - Repository Pattern: جداسازی لایه داده از منطق
//! - Dependency Injection: این handle صریحا ساخته و تزریق میشه،
//!   نه singleton سطح ماژول

mod repository;

pub use repository::*;

use std::sync::Arc;
use sqlx::{sqlite::{SqlitePool, SqlitePoolOptions}, migrate::Migrator};
use crate::error::Result;

// مسیر migration‌ها
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

// =====================================
// Database Connection
// =====================================
/// اتصال به دیتابیس با Connection Pool
///
/// # مفاهیم:
/// - `Arc<SqlitePool>`: Reference counting برای thread-safe sharing
/// - هر clone فقط counter رو زیاد میکنه، داده کپی نمیشه
#[derive(Debug, Clone)]
pub struct Database {
    /// Connection pool
    /// Arc برای share کردن بین handlers مختلف
    pool: Arc<SqlitePool>,
}

impl Database {
    /// اتصال به دیتابیس
    ///
    /// # Arguments
    /// * `database_url` - آدرس دیتابیس (مثلا `sqlite://data/records.db`)
    ///
    /// # Errors
    /// خطا برمیگردونه اگه اتصال موفق نباشه
    pub async fn connect(database_url: impl AsRef<str>) -> Result<Self> {
        // ساخت پوشه data اگه وجود نداره
        let url = database_url.as_ref();
        if url.starts_with("sqlite://") {
            // استخراج مسیر فایل
            if let Some(path) = url.strip_prefix("sqlite://") {
                // حذف query parameters
                let path = path.split('?').next().unwrap_or(path);
                if let Some(parent) = std::path::Path::new(path).parent() {
                    // `?` خطا رو propagate میکنه
                    std::fs::create_dir_all(parent)?;
                }
            }
        }

        // ساخت connection pool
        // Builder pattern برای تنظیمات
        let pool = SqlitePoolOptions::new()
            .max_connections(10)           // حداکثر 10 اتصال همزمان
            .min_connections(1)            // حداقل 1 اتصال
            .acquire_timeout(std::time::Duration::from_secs(5))
            .idle_timeout(std::time::Duration::from_secs(600))
            .connect(url)
            .await?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// ساخت دیتابیس in-memory - برای تست‌ها
    ///
    /// دیتابیس `:memory:` به ازای هر اتصال جداست، پس pool باید
    /// دقیقا یک اتصال داشته باشه وگرنه هر query یه دیتابیس خالی میبینه.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let db = Self {
            pool: Arc::new(pool),
        };

        db.migrate().await?;
        Ok(db)
    }

    /// اجرای migration‌ها
    ///
    /// جدول‌ها با `CREATE TABLE IF NOT EXISTS` ساخته میشن؛ اجرای
    /// چندباره در استارت برنامه بی‌خطره
    pub async fn migrate(&self) -> Result<()> {
        MIGRATOR.run(&*self.pool).await.map_err(sqlx::Error::from)?;
        Ok(())
    }

    /// دسترسی به pool
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// بررسی سلامت دیتابیس
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&*self.pool)
            .await?;
        Ok(())
    }
}
