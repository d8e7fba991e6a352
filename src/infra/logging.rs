use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Поставить глобальный tracing-подписчик.
///
/// `RUST_LOG` имеет приоритет над `default_filter`. Повторный вызов
/// (например, из нескольких тестов) молча ничего не делает.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init();
}
