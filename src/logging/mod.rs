pub mod config;

pub use config::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Инициализация логирования с конфигурацией.
///
/// Фильтр берётся из `RUST_LOG`, если переменная задана, иначе — из
/// `config.level`. Единственный sink — консоль.
pub fn init_logging(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))?;

    let console_layer = tracing_subscriber::fmt::layer()
        .with_ansi(config.ansi)
        .with_writer(std::io::stdout as fn() -> std::io::Stdout);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_level = %config.level,
        "Logging system initialized"
    );

    Ok(())
}
