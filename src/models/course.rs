//! # مدل درس
//!
//! Entity و DTO‌های مربوط به درس

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::Result;
use crate::validation::{self, Rule, Validate};

// =====================================
// Course Entity
// =====================================
/// Entity اصلی درس
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Course {
    /// کد درس - کلید اصلی، عدد ۵ رقمی
    pub course_id: String,

    /// نام درس (فارسی، حداکثر ۲۵ کاراکتر)
    pub course_name: String,

    /// دانشکده ارائه‌دهنده
    pub department: String,

    /// تعداد واحد (۱ تا ۴)
    pub credit: i64,
}

/// جدول قوانین درس
impl Validate for Course {
    fn validate(&self) -> Result<()> {
        let rules: &[Rule<Self>] = &[
            ("course_id", |c| validation::course_id(&c.course_id)),
            ("course_name", |c| {
                validation::persian_text_bounded(
                    &c.course_name,
                    validation::MAX_COURSE_NAME_CHARS,
                    "نام درس باید فقط حروف فارسی و حداکثر ۲۵ کاراکتر باشد",
                )
            }),
            ("department", |c| validation::department(&c.department)),
            ("credit", |c| validation::credit(c.credit)),
        ];

        validation::first_failure(self, rules)
    }
}

// =====================================
// Update Patch DTO
// =====================================
/// بدنه بروزرسانی جزئی درس - بدون کد درس (کلید تغییرناپذیره)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCourseRequest {
    pub course_name: Option<String>,
    pub department: Option<String>,
    pub credit: Option<i64>,
}

impl UpdateCourseRequest {
    /// اعمال patch روی رکورد فعلی - فیلد به فیلد
    #[must_use]
    pub fn apply_to(self, current: Course) -> Course {
        Course {
            course_id: current.course_id,
            course_name: self.course_name.unwrap_or(current.course_name),
            department: self.department.unwrap_or(current.department),
            credit: self.credit.unwrap_or(current.credit),
        }
    }
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    pub(crate) fn valid_course() -> Course {
        Course {
            course_id: "10101".to_string(),
            course_name: "ریاضی عمومی".to_string(),
            department: "علوم پایه".to_string(),
            credit: 3,
        }
    }

    #[test]
    fn test_valid_course_passes() {
        assert!(valid_course().validate().is_ok());
    }

    #[test]
    fn test_course_id_must_be_five_digits() {
        let mut course = valid_course();
        course.course_id = "101010".to_string();

        let err = course.validate().unwrap_err();
        assert!(matches!(err, AppError::Validation { ref field, .. } if field == "course_id"));
    }

    #[test]
    fn test_course_name_length_bound() {
        let mut course = valid_course();
        course.course_name = std::iter::repeat('م').take(26).collect();

        let err = course.validate().unwrap_err();
        assert!(matches!(err, AppError::Validation { ref field, .. } if field == "course_name"));
    }

    #[test]
    fn test_credit_range() {
        let mut course = valid_course();
        course.credit = 5;

        let err = course.validate().unwrap_err();
        assert!(matches!(err, AppError::Validation { ref field, .. } if field == "credit"));
    }

    #[test]
    fn test_patch_merge() {
        let current = valid_course();
        let patch = UpdateCourseRequest {
            credit: Some(2),
            ..Default::default()
        };

        let merged = patch.apply_to(current.clone());

        assert_eq!(merged.credit, 2);
        assert_eq!(merged.course_name, current.course_name);
        assert_eq!(merged.course_id, current.course_id);
    }
}
