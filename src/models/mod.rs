//! # ماژول مدل‌ها (Domain Models)
//!
//! این ماژول مدل‌های داده برنامه رو تعریف میکنه.
//!
//! ## مفاهیم Rust:
//! - **Structs**: ساختار داده
//! - **Derive Macros**: تولید خودکار کد
//! - **FromRow**: تبدیل از ردیف دیتابیس
//! - **Serialize/Deserialize**: تبدیل JSON
//!
//! ## تفاوت انواع مدل:
//! - **Entity**: داده‌ای که در دیتابیس ذخیره میشه - بدنه create هم هست
//! - **Patch DTO**: بدنه update با فیلدهای Option (فیلد غایب = دست نخورده)
//! - کلید اصلی هیچوقت در Patch نیست؛ بعد از ساخت، تغییرناپذیره

mod student;
mod teacher;
mod course;
mod dto;

// Re-export همه مدل‌ها
pub use student::*;
pub use teacher::*;
pub use course::*;
pub use dto::*;

use serde::{Deserialize, Serialize};

// =====================================
// List Query (offset/limit)
// =====================================
/// سقف تعداد آیتم‌ها در یک صفحه لیست
pub const MAX_LIST_LIMIT: i64 = 100;

/// پارامترهای query برای لیست‌گیری
///
/// # مفاهیم:
/// - `#[serde(default)]`: مقدار پیش‌فرض برای پارامتر غایب
/// - مقادیر خارج از بازه clamp میشن، نه reject
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListQuery {
    /// تعداد رکوردهایی که رد میشن (از صفر شروع میشه)
    #[serde(default)]
    pub offset: i64,

    /// حداکثر تعداد رکوردهای برگشتی
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    MAX_LIST_LIMIT
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: MAX_LIST_LIMIT,
        }
    }
}

impl ListQuery {
    /// offset امن برای SQL - منفی به صفر برمیگرده
    #[must_use]
    pub fn offset(&self) -> i64 {
        self.offset.max(0)
    }

    /// limit امن برای SQL - حداکثر 100
    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit.clamp(0, MAX_LIST_LIMIT)
    }
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;

    /// تست clamp شدن limit
    #[test]
    fn test_list_query_limit_is_clamped() {
        let over = ListQuery { offset: 0, limit: 150 };
        let normal = ListQuery { offset: 0, limit: 20 };

        assert_eq!(over.limit(), MAX_LIST_LIMIT);
        assert_eq!(normal.limit(), 20);
    }

    /// تست offset منفی
    #[test]
    fn test_list_query_negative_offset() {
        let query = ListQuery { offset: -5, limit: 10 };
        assert_eq!(query.offset(), 0);
    }

    /// تست مقادیر پیش‌فرض
    #[test]
    fn test_list_query_defaults() {
        let query = ListQuery::default();
        assert_eq!(query.offset(), 0);
        assert_eq!(query.limit(), 100);
    }
}
