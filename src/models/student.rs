//! # مدل دانشجو
//!
//! Entity و DTO‌های مربوط به دانشجو

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::Result;
use crate::validation::{self, Rule, Validate};

// =====================================
// Student Entity
// =====================================
/// Entity اصلی دانشجو
///
/// # مفاهیم:
/// - `#[derive(FromRow)]`: تبدیل خودکار از ردیف دیتابیس
/// - همین struct بدنه درخواست create هم هست؛ بعد از parse شدن JSON،
///   جدول قوانینش به ترتیب تعریف فیلدها اجرا میشه
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Student {
    /// شماره دانشجویی - کلید اصلی، پیشوند ثابت + دو رقم
    pub student_id: String,

    /// نام (فارسی)
    pub first_name: String,

    /// نام خانوادگی (فارسی)
    pub last_name: String,

    /// نام پدر (فارسی)
    pub father_name: String,

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

    /// سریال شناسنامه (۶ رقم)
    pub id_serial_number: String,

    /// حرف سریال شناسنامه (یک حرف فارسی)
    pub id_serial_letter: String,

    /// کد سریال شناسنامه (۲ رقم)
    pub id_serial_code: String,

    /// دانشکده
    pub department: String,

    /// رشته تحصیلی - باید با دانشکده سازگار باشه
    pub major: String,

    /// وضعیت تاهل
    pub marital_status: String,

    /// کد ملی ۱۰ رقمی
    pub national_id: String,
}

/// جدول قوانین دانشجو
///
/// ترتیب سطرها همون ترتیب تعریف فیلدهاست؛ اولین شکست، کل اعتبارسنجی
/// رو متوقف میکنه. دانشکده قبل از رشته میاد تا دانشکده نامعتبر با پیام
/// خودش برگرده نه پیام رشته.
impl Validate for Student {
    fn validate(&self) -> Result<()> {
        let rules: &[Rule<Self>] = &[
            ("student_id", |s| validation::student_id(&s.student_id)),
            ("first_name", |s| {
                validation::persian_text(&s.first_name, "نام باید فقط حاوی حروف فارسی و فاصله باشد")
            }),
            ("last_name", |s| {
                validation::persian_text(
                    &s.last_name,
                    "نام خانوادگی باید فقط حاوی حروف فارسی و فاصله باشد",
                )
            }),
            ("father_name", |s| {
                validation::persian_text(
                    &s.father_name,
                    "نام پدر باید فقط حاوی حروف فارسی و فاصله باشد",
                )
            }),
            ("birth_date", |s| validation::birth_date(&s.birth_date)),
            ("birth_city", |s| validation::birth_city(&s.birth_city)),
            ("address", |s| {
                validation::persian_text_bounded(
                    &s.address,
                    validation::MAX_ADDRESS_CHARS,
                    "آدرس باید حداکثر ۱۰۰ کاراکتر و شامل حروف فارسی باشد",
                )
            }),
            ("postal_code", |s| validation::postal_code(&s.postal_code)),
            ("mobile_phone", |s| validation::mobile_phone(&s.mobile_phone)),
            ("home_phone", |s| validation::home_phone(&s.home_phone)),
            ("id_serial_number", |s| {
                validation::id_serial_number(&s.id_serial_number)
            }),
            ("id_serial_letter", |s| {
                validation::id_serial_letter(&s.id_serial_letter)
            }),
            ("id_serial_code", |s| validation::id_serial_code(&s.id_serial_code)),
            ("department", |s| validation::department(&s.department)),
            ("major", |s| {
                validation::major_for_department(&s.department, &s.major)
            }),
            ("marital_status", |s| {
                validation::marital_status(&s.marital_status)
            }),
            ("national_id", |s| validation::national_id(&s.national_id)),
        ];

        validation::first_failure(self, rules)
    }
}

// =====================================
// Update Patch DTO
// =====================================
/// بدنه بروزرسانی جزئی دانشجو
///
/// # مفاهیم:
/// - همه فیلدها `Option` هستن: فیلد غایب در JSON یعنی None یعنی دست نزن
/// - شماره دانشجویی اینجا نیست - کلید اصلی تغییرناپذیره
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStudentRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub father_name: Option<String>,
    pub birth_date: Option<String>,
    pub birth_city: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub mobile_phone: Option<String>,
    pub home_phone: Option<String>,
    pub id_serial_number: Option<String>,
    pub id_serial_letter: Option<String>,
    pub id_serial_code: Option<String>,
    pub department: Option<String>,
    pub major: Option<String>,
    pub marital_status: Option<String>,
    pub national_id: Option<String>,
}

impl UpdateStudentRequest {
    /// اعمال patch روی رکورد فعلی - فیلد به فیلد
    ///
    /// # مفاهیم:
    /// - `unwrap_or`: مقدار جدید اگه بود، وگرنه مقدار فعلی
    /// - رکورد ادغام شده قبل از ذخیره دوباره اعتبارسنجی کامل میشه
    #[must_use]
    pub fn apply_to(self, current: Student) -> Student {
        Student {
            student_id: current.student_id,
            first_name: self.first_name.unwrap_or(current.first_name),
            last_name: self.last_name.unwrap_or(current.last_name),
            father_name: self.father_name.unwrap_or(current.father_name),
            birth_date: self.birth_date.unwrap_or(current.birth_date),
            birth_city: self.birth_city.unwrap_or(current.birth_city),
            address: self.address.unwrap_or(current.address),
            postal_code: self.postal_code.unwrap_or(current.postal_code),
            mobile_phone: self.mobile_phone.unwrap_or(current.mobile_phone),
            home_phone: self.home_phone.unwrap_or(current.home_phone),
            id_serial_number: self.id_serial_number.unwrap_or(current.id_serial_number),
            id_serial_letter: self.id_serial_letter.unwrap_or(current.id_serial_letter),
            id_serial_code: self.id_serial_code.unwrap_or(current.id_serial_code),
            department: self.department.unwrap_or(current.department),
            major: self.major.unwrap_or(current.major),
            marital_status: self.marital_status.unwrap_or(current.marital_status),
            national_id: self.national_id.unwrap_or(current.national_id),
        }
    }
}
