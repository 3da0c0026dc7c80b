use serde::{Deserialize, Serialize};

use config::{Config, ConfigError, Environment};

/// Настройки сервиса.
///
/// Значения по умолчанию повторяют демонстрационный сценарий;
/// любое из них можно переопределить переменной окружения с
/// префиксом `VESTNIK_`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Settings {
    /// Пауза между тактами генератора, мс.
    pub producer_tick_ms: u64,
    /// Адреса генерируются в диапазоне `[0, address_space)`.
    pub address_space: u32,
    /// Значения генерируются в диапазоне `[0, value_range)`.
    pub value_range: i64,
    /// Пауза декоратора после каждого уведомления, мс.
    pub notify_hold_ms: u64,
    /// Первый адрес, на который оформляется подписка.
    pub subscribe_from: u32,
    /// Последний адрес, на который оформляется подписка (включительно).
    pub subscribe_to: u32,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let cfg = Config::builder()
            // Добавляем значения по умолчанию
            .set_default("producer_tick_ms", 1)?
            .set_default("address_space", 10)?
            .set_default("value_range", 100)?
            .set_default("notify_hold_ms", 1000)?
            .set_default("subscribe_from", 3)?
            .set_default("subscribe_to", 9)?
            // Добавляем переменные окружения с префиксом VESTNIK_
            .add_source(Environment::with_prefix("VESTNIK"))
            .build()?;

        // Десериализуем конфигурацию в нашу структуру
        cfg.try_deserialize()
    }
}
