//! # تست‌های Integration
//!
//! این فایل تست‌های end-to-end رو شامل میشه.
//!
//! ## مفاهیم Rust در تست‌ها:
//! - `#[tokio::test]`: تست‌های async
//! - `tower::ServiceExt::oneshot`: اجرای یک request کامل روی router بدون سرور واقعی
//! - `Database::in_memory()`: دیتابیس SQLite در حافظه برای هر تست
//! - `assert!`, `assert_eq!`: ماکروهای assertion
//!
//! ## اجرای تست‌ها:
//! ```bash
//! cargo test                    # همه تست‌ها
//! cargo test --lib              # فقط تست‌های unit
//! cargo test --test integration_tests  # فقط این فایل
//! cargo test student_           # تست‌هایی که با student_ شروع میشن
//! ```

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use academic_records::{
    api::create_router,
    config::{ConfigBuilder, Environment},
    database::Database,
};

// =====================================
// Helpers
// =====================================
/// ساخت router کامل روی یه دیتابیس in-memory تازه
async fn test_app() -> Router {
    let db = Database::in_memory().await.expect("in-memory database");
    let config = ConfigBuilder::new()
        .environment(Environment::Testing)
        .build();

    create_router(db, config)
}

/// اجرای یک request و برگردوندن status و بدنه JSON
async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    (status, value)
}

/// بدنه یک دانشجوی کاملا معتبر
fn valid_student(student_id: &str) -> Value {
    json!({
        "student_id": student_id,
        "first_name": "علی",
        "last_name": "رضایی",
        "father_name": "حسین",
        "birth_date": "1380/05/21",
        "birth_city": "تهران",
        "address": "تهران خیابان انقلاب",
        "postal_code": "1234567890",
        "mobile_phone": "09123456789",
        "home_phone": "02122334455",
        "id_serial_number": "123456",
        "id_serial_letter": "ب",
        "id_serial_code": "12",
        "department": "فنی مهندسی",
        "major": "مهندسی کامپیوتر",
        "marital_status": "مجرد",
        "national_id": "0012345678"
    })
}

/// بدنه یک استاد معتبر
fn valid_teacher(teacher_id: &str) -> Value {
    json!({
        "teacher_id": teacher_id,
        "first_name": "مریم",
        "last_name": "احمدی",
        "birth_date": "1355/02/10",
        "birth_city": "اصفهان",
        "address": "اصفهان میدان نقش جهان",
        "postal_code": "9876543210",
        "mobile_phone": "09351234567",
        "home_phone": "03132221100",
        "national_id": "1270012345",
        "department": "علوم پایه",
        "major": "ریاضی"
    })
}

/// بدنه یک درس معتبر
fn valid_course(course_id: &str) -> Value {
    json!({
        "course_id": course_id,
        "course_name": "ریاضی عمومی",
        "department": "علوم پایه",
        "credit": 3
    })
}

// =====================================
// تست‌های CRUD دانشجو
// =====================================
mod student_api_tests {
    use super::*;

    /// ساخت موفق: 201 و echo رکورد ذخیره شده
    #[tokio::test]
    async fn student_create_echoes_record() {
        let app = test_app().await;

        let (status, body) =
            send(&app, "POST", "/students/", Some(valid_student("40311415001"))).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["student_id"], "40311415001");
        assert_eq!(body["first_name"], "علی");
        assert_eq!(body["major"], "مهندسی کامپیوتر");
    }

    /// شماره دانشجویی تکراری: 409
    #[tokio::test]
    async fn student_duplicate_id_is_conflict() {
        let app = test_app().await;

        let (status, _) =
            send(&app, "POST", "/students/", Some(valid_student("40311415002"))).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, _) =
            send(&app, "POST", "/students/", Some(valid_student("40311415002"))).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    /// قانون رد شده: 422 و نام فیلد در details
    #[tokio::test]
    async fn student_validation_failure_names_field() {
        let app = test_app().await;

        let mut student = valid_student("40311415003");
        student["first_name"] = json!("Ali");

        let (status, body) = send(&app, "POST", "/students/", Some(student)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["details"]["field"], "first_name");
    }

    /// شناسه با پیشوند شکسته: 422
    #[tokio::test]
    async fn student_bad_id_prefix_rejected() {
        let app = test_app().await;

        let mut student = valid_student("40311415004");
        student["student_id"] = json!("40311415A99");

        let (status, body) = send(&app, "POST", "/students/", Some(student)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["details"]["field"], "student_id");
    }

    /// رشته ناسازگار با دانشکده: 422 با خطای رشته
    #[tokio::test]
    async fn student_major_must_match_department() {
        let app = test_app().await;

        let mut student = valid_student("40311415005");
        student["department"] = json!("اقتصاد");
        // رشته هنوز مهندسی کامپیوتره

        let (status, body) = send(&app, "POST", "/students/", Some(student)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["details"]["field"], "major");
    }

    /// گرفتن شناسه‌ای که هیچوقت ساخته نشده: 404
    #[tokio::test]
    async fn student_get_missing_is_not_found() {
        let app = test_app().await;

        let (status, _) = send(&app, "GET", "/students/40311415099", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    /// بروزرسانی جزئی: فقط فیلد فرستاده شده عوض میشه
    #[tokio::test]
    async fn student_partial_update_merges() {
        let app = test_app().await;

        send(&app, "POST", "/students/", Some(valid_student("40311415006"))).await;

        let patch = json!({ "address": "شیراز خیابان حافظ" });
        let (status, body) = send(&app, "PUT", "/students/40311415006", Some(patch)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["address"], "شیراز خیابان حافظ");
        assert_eq!(body["first_name"], "علی"); // دست نخورده

        // رکورد ادغام شده واقعا ذخیره شده
        let (status, body) = send(&app, "GET", "/students/40311415006", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["address"], "شیراز خیابان حافظ");
        assert_eq!(body["major"], "مهندسی کامپیوتر");
    }

    /// patch که دانشکده رو عوض میکنه ولی رشته ناسازگار میمونه: 422
    #[tokio::test]
    async fn student_update_revalidates_cross_field() {
        let app = test_app().await;

        send(&app, "POST", "/students/", Some(valid_student("40311415007"))).await;

        let patch = json!({ "department": "اقتصاد" });
        let (status, body) = send(&app, "PUT", "/students/40311415007", Some(patch)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["details"]["field"], "major");
    }

    /// بروزرسانی رکورد غایب: 404
    #[tokio::test]
    async fn student_update_missing_is_not_found() {
        let app = test_app().await;

        let patch = json!({ "address": "تبریز" });
        let (status, _) = send(&app, "PUT", "/students/40311415098", Some(patch)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    /// حذف: بار اول ok، بار دوم 404
    #[tokio::test]
    async fn student_delete_then_delete_again() {
        let app = test_app().await;

        send(&app, "POST", "/students/", Some(valid_student("40311415008"))).await;

        let (status, body) = send(&app, "DELETE", "/students/40311415008", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "ok": true }));

        let (status, _) = send(&app, "DELETE", "/students/40311415008", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    /// لیست با ترتیب پایدار و offset/limit
    #[tokio::test]
    async fn student_list_is_ordered_and_paginated() {
        let app = test_app().await;

        for suffix in ["11", "12", "13"] {
            let id = format!("403114150{suffix}");
            send(&app, "POST", "/students/", Some(valid_student(&id))).await;
        }

        let (status, body) = send(&app, "GET", "/students/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(3));

        // صفحه وسط
        let (status, body) = send(&app, "GET", "/students/?offset=1&limit=1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["student_id"], "40311415012");
    }

    /// limit بالای سقف clamp میشه، reject نمیشه
    #[tokio::test]
    async fn student_list_limit_over_ceiling_is_clamped() {
        let app = test_app().await;

        for suffix in ["21", "22"] {
            let id = format!("403114150{suffix}");
            send(&app, "POST", "/students/", Some(valid_student(&id))).await;
        }

        let (status, body) = send(&app, "GET", "/students/?limit=150", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(2));
    }

    /// JSON خراب 400 میده، نه 422
    #[tokio::test]
    async fn student_malformed_json_is_bad_request() {
        let app = test_app().await;

        let request = Request::builder()
            .method("POST")
            .uri("/students/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{ not json"))
            .expect("request");

        let response = app.clone().oneshot(request).await.expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

// =====================================
// تست‌های CRUD استاد
// =====================================
mod teacher_api_tests {
    use super::*;

    /// چرخه کامل: ساخت، گرفتن، بروزرسانی، حذف
    #[tokio::test]
    async fn teacher_full_cycle() {
        let app = test_app().await;

        let (status, body) = send(&app, "POST", "/teachers/", Some(valid_teacher("123456"))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["teacher_id"], "123456");

        let (status, body) = send(&app, "GET", "/teachers/123456", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["major"], "ریاضی");

        let patch = json!({ "mobile_phone": "09121110000" });
        let (status, body) = send(&app, "PUT", "/teachers/123456", Some(patch)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mobile_phone"], "09121110000");
        assert_eq!(body["last_name"], "احمدی");

        let (status, body) = send(&app, "DELETE", "/teachers/123456", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "ok": true }));

        let (status, _) = send(&app, "GET", "/teachers/123456", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    /// کد استاد باید ۶ رقم باشه
    #[tokio::test]
    async fn teacher_id_must_be_six_digits() {
        let app = test_app().await;

        let mut teacher = valid_teacher("12345");

        let (status, body) = send(&app, "POST", "/teachers/", Some(teacher.clone())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["details"]["field"], "teacher_id");

        teacher["teacher_id"] = json!("12345a");
        let (status, _) = send(&app, "POST", "/teachers/", Some(teacher)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    /// قانون بین-فیلدی استاد هم روی patch اجرا میشه
    #[tokio::test]
    async fn teacher_update_revalidates_cross_field() {
        let app = test_app().await;

        send(&app, "POST", "/teachers/", Some(valid_teacher("654321"))).await;

        let patch = json!({ "major": "مهندسی برق" });
        let (status, body) = send(&app, "PUT", "/teachers/654321", Some(patch)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["details"]["field"], "major");
    }
}

// =====================================
// تست‌های CRUD درس
// =====================================
mod course_api_tests {
    use super::*;

    /// چرخه کامل درس
    #[tokio::test]
    async fn course_full_cycle() {
        let app = test_app().await;

        let (status, body) = send(&app, "POST", "/courses/", Some(valid_course("10101"))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["course_name"], "ریاضی عمومی");
        assert_eq!(body["credit"], 3);

        let patch = json!({ "credit": 2 });
        let (status, body) = send(&app, "PUT", "/courses/10101", Some(patch)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["credit"], 2);
        assert_eq!(body["course_name"], "ریاضی عمومی");

        let (status, body) = send(&app, "DELETE", "/courses/10101", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "ok": true }));
    }

    /// تعداد واحد خارج از بازه: 422
    #[tokio::test]
    async fn course_credit_out_of_range_rejected() {
        let app = test_app().await;

        let mut course = valid_course("10102");
        course["credit"] = json!(5);

        let (status, body) = send(&app, "POST", "/courses/", Some(course)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["details"]["field"], "credit");
    }

    /// نام درس غیرفارسی: 422
    #[tokio::test]
    async fn course_name_must_be_persian() {
        let app = test_app().await;

        let mut course = valid_course("10103");
        course["course_name"] = json!("Calculus");

        let (status, body) = send(&app, "POST", "/courses/", Some(course)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["details"]["field"], "course_name");
    }

    /// تکراری: 409
    #[tokio::test]
    async fn course_duplicate_id_is_conflict() {
        let app = test_app().await;

        send(&app, "POST", "/courses/", Some(valid_course("10104"))).await;

        let (status, _) = send(&app, "POST", "/courses/", Some(valid_course("10104"))).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }
}

// =====================================
// تست Health Check
// =====================================
mod health_tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_database_up() {
        let app = test_app().await;

        let (status, body) = send(&app, "GET", "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], true);
    }
}

// =====================================
// تست‌های اعتبارسنجی (نمونه‌های مرزی)
// =====================================
mod validation_tests {
    use academic_records::validation;

    /// نمونه‌های تاریخ تولد: فرمت و بازه دو خطای جدا هستن
    #[test]
    fn birth_date_examples() {
        assert!(validation::birth_date("1380/07/15").is_ok());
        assert!(validation::birth_date("1402/13/01").is_err()); // ماه ۱۳
        assert!(validation::birth_date("99/07/15").is_err()); // سال خارج از بازه
        assert!(validation::birth_date("1402-07-15").is_err()); // جداکننده اشتباه

        let format_err = validation::birth_date("1402-07-15").unwrap_err();
        let range_err = validation::birth_date("1402/13/01").unwrap_err();
        assert_ne!(format_err, range_err);
    }

    /// نمونه‌های شماره دانشجویی
    #[test]
    fn student_id_examples() {
        assert!(validation::student_id("40311415099").is_ok());
        assert!(validation::student_id("40311415A99").is_err());
        assert!(validation::student_id("4031141509").is_err()); // ده کاراکتر
    }

    /// رشته/دانشکده از §مثال‌های پذیرفته شده
    #[test]
    fn major_department_examples() {
        assert!(validation::major_for_department("فنی مهندسی", "مهندسی کامپیوتر").is_ok());
        assert!(validation::major_for_department("اقتصاد", "مهندسی کامپیوتر").is_err());
    }
}

// =====================================
// Property-Based Tests
// =====================================
mod property_tests {
    use proptest::prelude::*;

    use academic_records::models::ListQuery;
    use academic_records::validation;

    proptest! {
        /// هر دو رقم انتهایی، شماره دانشجویی معتبر میسازه
        #[test]
        fn student_id_any_two_digit_suffix_accepted(suffix in 0u32..100) {
            let id = format!("403114150{suffix:02}");
            prop_assert!(validation::student_id(&id).is_ok());
        }

        /// هیچ رشته ASCII‌ای از فیلتر متن فارسی رد نمیشه
        #[test]
        fn persian_text_rejects_ascii(s in "[a-zA-Z0-9]{1,20}") {
            prop_assert!(validation::persian_text(&s, "خطا").is_err());
        }

        /// limit لیست هیچوقت از سقف بیشتر نمیشه
        #[test]
        fn list_limit_never_exceeds_ceiling(offset: i64, limit: i64) {
            let query = ListQuery { offset, limit };
            prop_assert!(query.limit() <= 100);
            prop_assert!(query.limit() >= 0);
            prop_assert!(query.offset() >= 0);
        }

        /// واحد خارج از [1,4] همیشه رد میشه
        #[test]
        fn credit_out_of_range_rejected(value in 5i64..10_000) {
            prop_assert!(validation::credit(value).is_err());
            prop_assert!(validation::credit(-value).is_err());
        }
    }
}
