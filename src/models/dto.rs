//! # Data Transfer Objects (DTOs)
//!
//! DTO‌های عمومی که در API استفاده میشن
//!
//! ## مفاهیم:
//! - DTO: برای انتقال داده بین لایه‌ها
//! - Request/Response separation: جداسازی ورودی از خروجی

use serde::{Deserialize, Serialize};

// =====================================
// Delete Acknowledgment
// =====================================
/// پاسخ موفقیت حذف: `{"ok": true}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub ok: bool,
}

impl DeleteResponse {
    /// ساخت پاسخ حذف موفق
    #[must_use]
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

// =====================================
// Health Check
// =====================================
/// پاسخ health check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: bool,
}

impl HealthResponse {
    /// ساخت پاسخ healthy
    #[must_use]
    pub fn healthy(database_ok: bool) -> Self {
        Self {
            status: if database_ok { "healthy" } else { "degraded" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: database_ok,
        }
    }
}
