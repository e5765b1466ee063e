//! # Academic Records - نقطه ورود سرویس
//!
//! ترتیب بالا اومدن سرویس اطلاعات آموزشی:
//!
//! 1. `.env` و متغیرهای محیطی خونده و تنظیمات اعتبارسنجی میشن
//! 2. tracing بر اساس محیط اجرا راه میفته (pretty در توسعه، فشرده در بقیه)
//! 3. اتصال به store محلی SQLite برقرار و migration‌ها اجرا میشن -
//!    سه جدول students/teachers/courses به صورت idempotent ساخته میشن
//! 4. router با handle دیتابیس تزریق شده ساخته و سرو میشه
//!
//! دیتابیس همینجا ساخته و صریحا به `create_router` پاس داده میشه؛
//! singleton سطح ماژولی در کار نیست.

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use academic_records::{
    api::create_router,
    config::Config,
    database::Database,
    error::{AppError, Result},
};

/// نقطه ورود سرویس
///
/// # Errors
/// خطا برمیگردونه اگه تنظیمات نامعتبر باشن، فایل دیتابیس باز نشه،
/// migration‌ها شکست بخورن یا پورت قابل bind نباشه
#[tokio::main]
async fn main() -> Result<()> {
    // فایل .env اختیاریه - نبودنش خطا نیست
    dotenvy::dotenv().ok();

    // تنظیمات قبل از لاگینگ، چون فرمت لاگ به محیط اجرا وابسته‌ست
    let config = Config::from_env()?;
    config.validate()?;

    init_tracing(&config);
    info!(environment = ?config.environment, "Starting academic records service");

    // اتصال و ساخت جدول‌ها؛ اجرای دوباره migration روی فایل موجود بی‌اثره
    let database = Database::connect(&config.database_url).await?;
    database.migrate().await?;
    info!(database_url = %config.database_url, "Database ready");

    let app = create_router(database, config.clone());

    let addr = config.server_addr();
    info!("Listening on http://{addr}");

    let listener = TcpListener::bind(&addr).await?;

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;

    Ok(())
}

/// راه‌اندازی tracing
///
/// فیلتر از `RUST_LOG` میاد؛ پیش‌فرضش لاگ‌های خود سرویس به اضافه
/// tower_http هست تا request‌های HTTP هم دیده بشن. خروجی در محیط
/// توسعه چندخطی pretty هست و در بقیه محیط‌ها تک‌خطی فشرده که برای
/// جمع‌آوری لاگ مناسب‌تره.
fn init_tracing(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("academic_records=debug,tower_http=debug"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.environment.is_development() {
        registry.with(fmt::layer().with_target(true).pretty()).init();
    } else {
        registry.with(fmt::layer().with_target(true).compact()).init();
    }
}
