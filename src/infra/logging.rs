use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Фильтр, если `RUST_LOG` не задан.
pub const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Поставить глобальный fmt-подписчик с учётом `RUST_LOG`.
///
/// Повторный вызов игнорируется.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(env_filter())
        .try_init();
}

/// Подписчик на текущий поток, пишет через тестовый вывод.
pub fn test_tracing() -> tracing::subscriber::DefaultGuard {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .with(env_filter())
        .set_default()
}
