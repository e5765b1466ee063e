//! # مدل استاد
//!
//! Entity و DTO‌های مربوط به استاد

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::Result;
use crate::validation::{self, Rule, Validate};

// =====================================
// Teacher Entity
// =====================================
/// Entity اصلی استاد
///
/// همون فیلدهای شخصی دانشجو رو داره به اضافه کد استاد و دانشکده/رشته؛
/// خبری از اطلاعات شناسنامه و وضعیت تاهل نیست.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Teacher {
    /// کد استاد - کلید اصلی، عدد ۶ رقمی
    pub teacher_id: String,

    /// نام (فارسی)
    pub first_name: String,

    /// نام خانوادگی (فارسی)
    pub last_name: String,

    /// تاریخ تولد شمسی به صورت YYYY/MM/DD
    pub birth_date: String,

    /// شهر محل تولد - یکی از مراکز استان
    pub birth_city: String,

    /// آدرس (فارسی، حداکثر ۱۰۰ کاراکتر)
    pub address: String,

    /// کد پستی ۱۰ رقمی
    pub postal_code: String,

    /// تلفن همراه
    pub mobile_phone: String,

    /// تلفن ثابت
    pub home_phone: String,

    /// کد ملی ۱۰ رقمی
    pub national_id: String,

    /// دانشکده
    pub department: String,

    /// رشته تحصیلی - باید با دانشکده سازگار باشه
    pub major: String,
}

/// جدول قوانین استاد - دانشکده قبل از رشته
impl Validate for Teacher {
    fn validate(&self) -> Result<()> {
        let rules: &[Rule<Self>] = &[
            ("teacher_id", |t| validation::teacher_id(&t.teacher_id)),
            ("first_name", |t| {
                validation::persian_text(&t.first_name, "نام باید فقط حاوی حروف فارسی و فاصله باشد")
            }),
            ("last_name", |t| {
                validation::persian_text(
                    &t.last_name,
                    "نام خانوادگی باید فقط حاوی حروف فارسی و فاصله باشد",
                )
            }),
            ("birth_date", |t| validation::birth_date(&t.birth_date)),
            ("birth_city", |t| validation::birth_city(&t.birth_city)),
            ("address", |t| {
                validation::persian_text_bounded(
                    &t.address,
                    validation::MAX_ADDRESS_CHARS,
                    "آدرس باید حداکثر ۱۰۰ کاراکتر و شامل حروف فارسی باشد",
                )
            }),
            ("postal_code", |t| validation::postal_code(&t.postal_code)),
            ("mobile_phone", |t| validation::mobile_phone(&t.mobile_phone)),
            ("home_phone", |t| validation::home_phone(&t.home_phone)),
            ("national_id", |t| validation::national_id(&t.national_id)),
            ("department", |t| validation::department(&t.department)),
            ("major", |t| {
                validation::major_for_department(&t.department, &t.major)
            }),
        ];

        validation::first_failure(self, rules)
    }
}

// =====================================
// Update Patch DTO
// =====================================
/// بدنه بروزرسانی جزئی استاد - بدون کد استاد (کلید تغییرناپذیره)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTeacherRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<String>,
    pub birth_city: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub mobile_phone: Option<String>,
    pub home_phone: Option<String>,
    pub national_id: Option<String>,
    pub department: Option<String>,
    pub major: Option<String>,
}

impl UpdateTeacherRequest {
    /// اعمال patch روی رکورد فعلی - فیلد به فیلد
    #[must_use]
    pub fn apply_to(self, current: Teacher) -> Teacher {
        Teacher {
            teacher_id: current.teacher_id,
            first_name: self.first_name.unwrap_or(current.first_name),
            last_name: self.last_name.unwrap_or(current.last_name),
            birth_date: self.birth_date.unwrap_or(current.birth_date),
            birth_city: self.birth_city.unwrap_or(current.birth_city),
            address: self.address.unwrap_or(current.address),
            postal_code: self.postal_code.unwrap_or(current.postal_code),
            mobile_phone: self.mobile_phone.unwrap_or(current.mobile_phone),
            home_phone: self.home_phone.unwrap_or(current.home_phone),
            national_id: self.national_id.unwrap_or(current.national_id),
            department: self.department.unwrap_or(current.department),
            major: self.major.unwrap_or(current.major),
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

    pub(crate) fn valid_teacher() -> Teacher {
        Teacher {
            teacher_id: "123456".to_string(),
            first_name: "مریم".to_string(),
            last_name: "احمدی".to_string(),
            birth_date: "1355/02/10".to_string(),
            birth_city: "اصفهان".to_string(),
            address: "اصفهان میدان نقش جهان".to_string(),
            postal_code: "9876543210".to_string(),
            mobile_phone: "09351234567".to_string(),
            home_phone: "03132221100".to_string(),
            national_id: "1270012345".to_string(),
            department: "علوم پایه".to_string(),
            major: "ریاضی".to_string(),
        }
    }

    #[test]
    fn test_valid_teacher_passes() {
        assert!(valid_teacher().validate().is_ok());
    }

    #[test]
    fn test_teacher_id_must_be_six_digits() {
        let mut teacher = valid_teacher();
        teacher.teacher_id = "12345".to_string();

        let err = teacher.validate().unwrap_err();
        assert!(matches!(err, AppError::Validation { ref field, .. } if field == "teacher_id"));
    }

    #[test]
    fn test_teacher_major_must_match_department() {
        let mut teacher = valid_teacher();
        teacher.major = "مهندسی برق".to_string();

        let err = teacher.validate().unwrap_err();
        assert!(matches!(err, AppError::Validation { ref field, .. } if field == "major"));
    }

    #[test]
    fn test_patch_keeps_unset_fields() {
        let current = valid_teacher();
        let patch = UpdateTeacherRequest {
            mobile_phone: Some("09121110000".to_string()),
            ..Default::default()
        };

        let merged = patch.apply_to(current.clone());

        assert_eq!(merged.mobile_phone, "09121110000");
        assert_eq!(merged.first_name, current.first_name);
        assert_eq!(merged.teacher_id, current.teacher_id);
    }
}
