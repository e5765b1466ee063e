//! # ماژول تنظیمات (Configuration)
//!
//! این ماژول مسئول خوندن و مدیریت تنظیمات برنامه هست.
//!
//! ## مفاهیم Rust:
//! - **Structs**: ساختار داده‌ای برای نگهداری تنظیمات
//! - **Derive Macros**: تولید خودکار کد با `#[derive(...)]`
//! - **Default Trait**: مقادیر پیش‌فرض
//! - **Serde**: سریالایز/دسریالایز
//! - **Builder Pattern**: ساخت تدریجی آبجکت

use std::env;
use serde::{Deserialize, Serialize};
use crate::error::{AppError, Result};

/// تنظیمات اصلی برنامه
///
/// # مفاهیم:
/// - `#[derive(...)]`: macro برای تولید خودکار implementation
/// - `Clone`: اجازه کپی کردن (deep copy)
/// - `Serialize/Deserialize`: تبدیل به/از JSON و فرمت‌های دیگه
///
/// # مثال
/// ```rust
/// use academic_records::config::Config;
///
/// let config = Config::default();
/// println!("Port: {}", config.port);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// آدرس هاست سرور
    pub host: String,

    /// پورت سرور
    pub port: u16,

    /// آدرس اتصال به دیتابیس
    pub database_url: String,

    /// محیط اجرا (development, production)
    pub environment: Environment,
}

/// محیط اجرای برنامه
///
/// # مفاهیم:
/// - `enum`: نوع داده شمارشی
/// - `#[serde(rename_all = "lowercase")]`: تغییر نام‌گذاری در سریالایز
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// محیط توسعه - با قابلیت‌های دیباگ
    #[default]
    Development,

    /// محیط تست
    Testing,

    /// محیط تولید - بهینه‌سازی شده
    Production,
}

impl Environment {
    /// آیا در محیط توسعه هستیم؟
    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    /// آیا در محیط تولید هستیم؟
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// تبدیل String به Environment
///
/// # مفاهیم:
/// - `impl From<T>`: پیاده‌سازی trait تبدیل
/// - `match`: pattern matching
/// - `_`: wildcard برای بقیه حالت‌ها
impl From<String> for Environment {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "testing" | "test" => Environment::Testing,
            _ => Environment::Development,
        }
    }
}

/// مقادیر پیش‌فرض برای Config
impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            database_url: "sqlite://data/records.db?mode=rwc".to_string(),
            environment: Environment::Development,
        }
    }
}

impl Config {
    /// ساخت تنظیمات از متغیرهای محیطی
    ///
    /// # مفاهیم:
    /// - `env::var()`: خوندن متغیر محیطی
    /// - `unwrap_or_else`: مقدار پیش‌فرض با closure
    /// - `parse()`: تبدیل String به نوع‌های دیگه
    ///
    /// # Errors
    /// خطا برمیگردونه اگه متغیرهای اجباری موجود نباشن
    ///
    /// # مثال
    /// ```rust,no_run
    /// use academic_records::config::Config;
    ///
    /// let config = Config::from_env().expect("Failed to load config");
    /// ```
    pub fn from_env() -> Result<Self> {
        // helper function برای خوندن متغیر محیطی با default
        let get_env = |key: &str, default: &str| -> String {
            env::var(key).unwrap_or_else(|_| default.to_string())
        };

        // helper برای parse کردن عدد
        let parse_env = |key: &str, default: u32| -> u32 {
            env::var(key)
                .ok()                           // تبدیل Result به Option
                .and_then(|v| v.parse().ok())   // parse و تبدیل به Option
                .unwrap_or(default)             // مقدار پیش‌فرض
        };

        Ok(Self {
            host: get_env("HOST", "127.0.0.1"),
            port: parse_env("PORT", 3000) as u16,
            database_url: get_env("DATABASE_URL", "sqlite://data/records.db?mode=rwc"),
            environment: get_env("ENVIRONMENT", "development").into(),
        })
    }

    /// اعتبارسنجی تنظیمات
    ///
    /// # مفاهیم:
    /// - Early return: برگشت زودهنگام در صورت خطا
    pub fn validate(&self) -> Result<()> {
        // چک کردن port
        if self.port == 0 {
            return Err(AppError::Config(
                "PORT cannot be 0".to_string()
            ));
        }

        // چک کردن آدرس دیتابیس
        if self.database_url.is_empty() {
            return Err(AppError::Config(
                "DATABASE_URL cannot be empty".to_string()
            ));
        }

        Ok(())
    }

    /// آدرس کامل سرور
    #[must_use]
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =====================================
// Builder Pattern
// =====================================
/// ساخت Config با Builder Pattern
///
/// # مفاهیم:
/// - Builder Pattern: ساخت تدریجی یک object
/// - Method Chaining: زنجیره‌ای کردن متدها
/// - Consuming self: گرفتن ownership در هر متد
///
/// # مثال
/// ```rust
/// use academic_records::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .port(8080)
///     .host("0.0.0.0")
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// ساخت builder جدید
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// تنظیم پورت
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// تنظیم هاست
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// تنظیم database_url
    #[must_use]
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = url.into();
        self
    }

    /// تنظیم محیط
    #[must_use]
    pub fn environment(mut self, env: Environment) -> Self {
        self.config.environment = env;
        self
    }

    /// ساخت Config نهایی
    #[must_use]
    pub fn build(self) -> Config {
        self.config
    }

    /// ساخت Config با اعتبارسنجی
    ///
    /// # Errors
    /// خطا برمیگردونه اگه اعتبارسنجی fail بشه
    pub fn build_validated(self) -> Result<Config> {
        let config = self.build();
        config.validate()?;
        Ok(config)
    }
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;

    /// تست ساخت config با مقادیر پیش‌فرض
    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "127.0.0.1");
    }

    /// تست Builder Pattern
    #[test]
    fn test_config_builder() {
        let config = ConfigBuilder::new()
            .port(8080)
            .host("0.0.0.0")
            .build();

        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
    }

    /// تست تبدیل Environment
    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from("production".to_string()), Environment::Production);
        assert_eq!(Environment::from("PROD".to_string()), Environment::Production);
        assert_eq!(Environment::from("development".to_string()), Environment::Development);
        assert_eq!(Environment::from("unknown".to_string()), Environment::Development);
    }

    /// تست اعتبارسنجی
    #[test]
    fn test_validation_rejects_zero_port() {
        let config = ConfigBuilder::new().port(0).build();

        assert!(config.validate().is_err());
    }
}
