//! # HTTP Handlers
//!
//! یک فایل به ازای هر resource، هر کدوم با پنج handler هم‌شکل
//! (create, list, get, update, delete) که فقط به سرویس خودشون وصل میشن؛
//! به اضافه health check. منطق و اعتبارسنجی اینجا نیست - handler فقط
//! ورودی رو استخراج میکنه و نتیجه سرویس رو به response تبدیل میکنه.

pub mod student;
pub mod teacher;
pub mod course;
pub mod health;
