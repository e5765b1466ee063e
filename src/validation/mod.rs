//! # ماژول اعتبارسنجی (Validation Rules)
//!
//! این ماژول جدول قوانین اعتبارسنجی فارسی رو ارائه میده:
//! regex‌ها، لیست‌های ثابت (شهرها، دانشکده‌ها، رشته‌ها) و predicate‌های خالص.
//!
//! ## مفاهیم Rust:
//! - **once_cell::Lazy**: مقداردهی اولیه تنبل برای regex‌ها
//! - **static**: متغیرهای با عمر 'static
//! - **fn pointers**: جدول قوانین به جای dynamic dispatch
//!
//! ## طراحی
//!
//! هر entity یک جدول مرتب از `(نام فیلد, predicate)` داره که به ترتیب
//! تعریف فیلدها اجرا میشه. اولین قانونی که رد بشه، اعتبارسنجی رو متوقف
//! میکنه و پیام فارسی همون فیلد به کلاینت برمیگرده. هیچ جمع‌آوری چند
//! خطایی در کار نیست.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{AppError, Result};

// =====================================
// Constants
// =====================================
/// پیشوند ثابت شماره دانشجویی - دو رقم انتهایی آزاد هستن
pub const STUDENT_ID_PREFIX: &str = "403114150";

/// طول کامل شماره دانشجویی
pub const STUDENT_ID_LENGTH: usize = 11;

/// طول کد استاد
pub const TEACHER_ID_LENGTH: usize = 6;

/// طول کد درس
pub const COURSE_ID_LENGTH: usize = 5;

/// طول کد پستی
pub const POSTAL_CODE_LENGTH: usize = 10;

/// طول کد ملی
pub const NATIONAL_ID_LENGTH: usize = 10;

/// طول سریال شناسنامه
pub const ID_SERIAL_NUMBER_LENGTH: usize = 6;

/// طول کد سریال شناسنامه
pub const ID_SERIAL_CODE_LENGTH: usize = 2;

/// حداکثر طول آدرس (به کاراکتر، نه بایت)
pub const MAX_ADDRESS_CHARS: usize = 100;

/// حداکثر طول نام درس
pub const MAX_COURSE_NAME_CHARS: usize = 25;

/// بازه مجاز سال تولد شمسی
pub const BIRTH_YEAR_RANGE: std::ops::RangeInclusive<i32> = 1300..=1400;

/// بازه مجاز تعداد واحد درس
pub const CREDIT_RANGE: std::ops::RangeInclusive<i64> = 1..=4;

/// ۳۲ حرف الفبای فارسی - برای حرف سریال شناسنامه
pub const PERSIAN_ALPHABET: &str = "ابپتثجچحخدذرزژسشصضطظعغفقکگلمنوهی";

/// ۳۱ مرکز استان ایران - تنها مقادیر مجاز شهر محل تولد
pub const PROVINCE_CAPITALS: [&str; 31] = [
    "تهران", "مشهد", "اصفهان", "کرج", "شیراز", "تبریز", "قم", "اهواز", "کرمانشاه",
    "ارومیه", "رشت", "زاهدان", "همدان", "کرمان", "یزد", "اردبیل", "بندرعباس",
    "اراک", "اسلامشهر", "زنجان", "سنندج", "قزوین", "خرم آباد", "گرگان",
    "ساری", "بجنورد", "بوشهر", "بیرجند", "ایلام", "شهرکرد", "یاسوج",
];

/// دانشکده‌های مجاز
pub const DEPARTMENTS: [&str; 3] = ["فنی مهندسی", "علوم پایه", "اقتصاد"];

/// رشته‌های دانشکده فنی مهندسی
pub const ENGINEERING_MAJORS: [&str; 10] = [
    "مهندسی کامپیوتر", "مهندسی برق", "مهندسی مکانیک", "مهندسی عمران",
    "مهندسی صنایع", "مهندسی شیمی", "مهندسی مواد", "مهندسی هوافضا",
    "مهندسی نفت", "مهندسی معماری",
];

/// رشته‌های دانشکده علوم پایه
pub const BASIC_SCIENCE_MAJORS: [&str; 10] = [
    "ریاضی", "فیزیک", "شیمی", "زیست‌شناسی", "زمین‌شناسی",
    "آمار", "علوم کامپیوتر", "بیوشیمی", "میکروبیولوژی", "ژنتیک",
];

/// رشته‌های دانشکده اقتصاد
pub const ECONOMICS_MAJORS: [&str; 10] = [
    "اقتصاد", "مدیریت بازرگانی", "حسابداری", "مدیریت مالی",
    "مدیریت صنعتی", "اقتصاد کشاورزی", "اقتصاد بین‌الملل",
    "بانکداری", "بیمه", "مدیریت دولتی",
];

/// وضعیت‌های تاهل مجاز
pub const MARITAL_STATUSES: [&str; 2] = ["مجرد", "متاهل"];

// =====================================
// Lazy Statics (Regex patterns)
// =====================================
/// الگوی متن فارسی: فقط بلوک یونیکد عربی/فارسی و فاصله
///
/// # مفاهیم:
/// - `Lazy`: مقداردهی اولیه در اولین استفاده
/// - این بهینه‌تر از ساخت Regex هر بار هست
pub static PERSIAN_TEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\x{0600}-\x{06FF}\s]+$").expect("Invalid regex pattern")
});

/// الگوی تلفن همراه ایران: 09 و نه رقم بعدش
pub static MOBILE_PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^09\d{9}$").expect("Invalid regex pattern")
});

/// الگوی تلفن ثابت ایران: صفر + کد شهر ۲ یا ۳ رقمی + ۸ رقم مشترک
pub static HOME_PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^0\d{2,3}\d{8}$").expect("Invalid regex pattern")
});

// =====================================
// Rule Table
// =====================================
/// یک قانون: نام فیلد به همراه predicate خالص روی کل رکورد
///
/// fn pointer به جای trait object - جدول ساده، نه virtual dispatch
pub type Rule<T> = (&'static str, fn(&T) -> std::result::Result<(), String>);

/// اجرای جدول قوانین به ترتیب؛ اولین شکست اعتبارسنجی رو متوقف میکنه
///
/// # مثال
/// ```rust
/// use academic_records::validation::{self, Rule};
///
/// struct Point { x: i64 }
/// let rules: &[Rule<Point>] = &[
///     ("x", |p| if p.x > 0 { Ok(()) } else { Err("باید مثبت باشد".to_string()) }),
/// ];
/// assert!(validation::first_failure(&Point { x: 1 }, rules).is_ok());
/// assert!(validation::first_failure(&Point { x: 0 }, rules).is_err());
/// ```
pub fn first_failure<T>(record: &T, rules: &[Rule<T>]) -> Result<()> {
    for (field, check) in rules {
        if let Err(message) = check(record) {
            return Err(AppError::validation(*field, message));
        }
    }
    Ok(())
}

/// Trait مشترک رکوردهای قابل اعتبارسنجی
///
/// هر entity جدول قوانین خودش رو داره و این trait فقط نقطه ورود
/// مشترک برای extractor و سرویس‌هاست.
pub trait Validate {
    /// اجرای کامل جدول قوانین این رکورد
    ///
    /// # Errors
    /// اولین قانون رد شده به صورت `AppError::Validation` برمیگرده
    fn validate(&self) -> Result<()>;
}

// =====================================
// Field Predicates
// =====================================
/// متن فارسی: فقط حروف فارسی و فاصله
pub fn persian_text(value: &str, message: &str) -> std::result::Result<(), String> {
    if PERSIAN_TEXT.is_match(value) {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

/// متن فارسی با سقف طول (به کاراکتر یونیکد، نه بایت)
pub fn persian_text_bounded(
    value: &str,
    max_chars: usize,
    message: &str,
) -> std::result::Result<(), String> {
    if value.chars().count() <= max_chars && PERSIAN_TEXT.is_match(value) {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

/// رشته تمام رقمی با طول دقیق
pub fn digits(value: &str, length: usize, message: &str) -> std::result::Result<(), String> {
    if value.len() == length && !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

/// تاریخ تولد شمسی به فرمت YYYY/MM/DD
///
/// خطای فرمت (جداکننده اشتباه، جزء غیرعددی) از خطای بازه جداست:
/// کلاینت باید بفهمه رشته رو اشتباه ساخته یا مقدارش خارج از محدوده‌ست.
pub fn birth_date(value: &str) -> std::result::Result<(), String> {
    const FORMAT_MESSAGE: &str = "فرمت تاریخ تولد باید به صورت شمسی YYYY/MM/DD باشد";
    const RANGE_MESSAGE: &str =
        "سال باید بین ۱۳۰۰ تا ۱۴۰۰، ماه بین ۱ تا ۱۲ و روز بین ۱ تا ۳۱ باشد";

    let mut parts = value.split('/');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(FORMAT_MESSAGE.to_string());
    };

    let (Ok(year), Ok(month), Ok(day)) =
        (year.parse::<i32>(), month.parse::<i32>(), day.parse::<i32>())
    else {
        return Err(FORMAT_MESSAGE.to_string());
    };

    if BIRTH_YEAR_RANGE.contains(&year) && (1..=12).contains(&month) && (1..=31).contains(&day) {
        Ok(())
    } else {
        Err(RANGE_MESSAGE.to_string())
    }
}

/// تلفن همراه مطابق استاندارد ایران
pub fn mobile_phone(value: &str) -> std::result::Result<(), String> {
    if MOBILE_PHONE.is_match(value) {
        Ok(())
    } else {
        Err("تلفن همراه باید مطابق استاندارد ایران باشد".to_string())
    }
}

/// تلفن ثابت مطابق استاندارد ایران
pub fn home_phone(value: &str) -> std::result::Result<(), String> {
    if HOME_PHONE.is_match(value) {
        Ok(())
    } else {
        Err("تلفن ثابت باید مطابق استاندارد ایران باشد".to_string())
    }
}

/// عضویت دقیق در یک لیست ثابت - بدون نرمال‌سازی، حساس به حروف
pub fn one_of(
    value: &str,
    allowed: &[&str],
    message: &str,
) -> std::result::Result<(), String> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

/// شهر محل تولد: یکی از ۳۱ مرکز استان
pub fn birth_city(value: &str) -> std::result::Result<(), String> {
    one_of(value, &PROVINCE_CAPITALS, "شهر محل تولد باید یکی از مراکز استان باشد")
}

/// دانشکده: یکی از سه دانشکده مجاز
pub fn department(value: &str) -> std::result::Result<(), String> {
    one_of(
        value,
        &DEPARTMENTS,
        "دانشکده باید یکی از فنی مهندسی، علوم پایه یا اقتصاد باشد",
    )
}

/// وضعیت تاهل: مجرد یا متاهل
pub fn marital_status(value: &str) -> std::result::Result<(), String> {
    one_of(value, &MARITAL_STATUSES, "وضعیت تاهل باید مجرد یا متاهل باشد")
}

/// لیست رشته‌های مجاز یک دانشکده
///
/// # مفاهیم:
/// - جدول ثابت دانشکده → رشته‌ها
/// - `Option`: دانشکده ناشناخته لیستی نداره
#[must_use]
pub fn allowed_majors(department: &str) -> Option<&'static [&'static str]> {
    match department {
        "فنی مهندسی" => Some(&ENGINEERING_MAJORS),
        "علوم پایه" => Some(&BASIC_SCIENCE_MAJORS),
        "اقتصاد" => Some(&ECONOMICS_MAJORS),
        _ => None,
    }
}

/// قانون بین-فیلدی: رشته باید در لیست رشته‌های دانشکده خود رکورد باشه
///
/// در جدول قوانین، دانشکده قبل از رشته بررسی میشه؛ پس دانشکده نامعتبر
/// با پیام خود دانشکده متوقف شده و هیچوقت به این قانون نمیرسه.
pub fn major_for_department(
    department: &str,
    major: &str,
) -> std::result::Result<(), String> {
    let Some(majors) = allowed_majors(department) else {
        return Err("دانشکده نامعتبر است".to_string());
    };

    if majors.contains(&major) {
        Ok(())
    } else {
        Err(format!("رشته {major} با دانشکده {department} سازگار نیست"))
    }
}

/// شماره دانشجویی: ۱۱ کاراکتر، ۹ کاراکتر اول پیشوند ثابت، دو رقم آخر عدد
pub fn student_id(value: &str) -> std::result::Result<(), String> {
    // چک پیشوند قبل از slice - تضمین میکنه ۹ بایت اول ASCII هستن
    if value.len() == STUDENT_ID_LENGTH
        && value.starts_with(STUDENT_ID_PREFIX)
        && value[STUDENT_ID_PREFIX.len()..].bytes().all(|b| b.is_ascii_digit())
    {
        Ok(())
    } else {
        Err(format!(
            "شماره دانشجویی باید با {STUDENT_ID_PREFIX} شروع شود و دو رقم پایانی آن عدد باشد"
        ))
    }
}

/// کد استاد: عدد ۶ رقمی
pub fn teacher_id(value: &str) -> std::result::Result<(), String> {
    digits(value, TEACHER_ID_LENGTH, "کد استاد باید عدد ۶ رقمی باشد")
}

/// کد درس: عدد ۵ رقمی
pub fn course_id(value: &str) -> std::result::Result<(), String> {
    digits(value, COURSE_ID_LENGTH, "کد درس باید عدد ۵ رقمی باشد")
}

/// کد پستی: عدد ۱۰ رقمی
pub fn postal_code(value: &str) -> std::result::Result<(), String> {
    digits(value, POSTAL_CODE_LENGTH, "کد پستی باید عدد ۱۰ رقمی باشد")
}

/// کد ملی: عدد ۱۰ رقمی
pub fn national_id(value: &str) -> std::result::Result<(), String> {
    digits(value, NATIONAL_ID_LENGTH, "کد ملی باید عدد ۱۰ رقمی باشد")
}

/// سریال شناسنامه: عدد ۶ رقمی
pub fn id_serial_number(value: &str) -> std::result::Result<(), String> {
    digits(
        value,
        ID_SERIAL_NUMBER_LENGTH,
        "سریال شناسنامه باید عدد ۶ رقمی باشد",
    )
}

/// حرف سریال شناسنامه: دقیقا یک حرف از الفبای فارسی
pub fn id_serial_letter(value: &str) -> std::result::Result<(), String> {
    if value.chars().count() == 1 && PERSIAN_ALPHABET.contains(value) {
        Ok(())
    } else {
        Err("حرف سریال شناسنامه باید یکی از حروف الفبای فارسی باشد".to_string())
    }
}

/// کد سریال شناسنامه: عدد ۲ رقمی
pub fn id_serial_code(value: &str) -> std::result::Result<(), String> {
    digits(
        value,
        ID_SERIAL_CODE_LENGTH,
        "کد سریال شناسنامه باید عدد ۲ رقمی باشد",
    )
}

/// تعداد واحد درس: بین ۱ تا ۴
pub fn credit(value: i64) -> std::result::Result<(), String> {
    if CREDIT_RANGE.contains(&value) {
        Ok(())
    } else {
        Err("تعداد واحد باید بین ۱ تا ۴ باشد".to_string())
    }
}
