/// Конфигурация логирования.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Директива фильтра по умолчанию, если `RUST_LOG` не задан.
    pub level: String,
    /// Управление ANSI-цветами консольного вывода.
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
        }
    }
}
