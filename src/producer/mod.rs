//! Генератор имитируемых изменений данных.

use std::{sync::Arc, time::Duration};

use tokio::{select, sync::Notify, task::JoinHandle, time::interval};
use tracing::info;

use crate::{
    notify::Dispatcher,
    store::{AddressCache, Value},
};

/// Параметры генератора изменений.
#[derive(Debug, Clone)]
pub struct ProducerConfig {
    /// Пауза между тактами генерации.
    pub tick: Duration,
    /// Адреса генерируются в диапазоне `[0, address_space)`.
    pub address_space: u32,
    /// Значения генерируются в диапазоне `[0, value_range)`.
    pub value_range: Value,
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(1),
            address_space: 10,
            value_range: 100,
        }
    }
}

/// Запускает фоновую задачу, имитирующую внешние изменения данных.
///
/// Каждый такт задача берёт случайный адрес и случайное значение,
/// пишет их в кэш и дёргает диспетчер. Постановка уведомления в
/// очередь не блокирует цикл. Задача завершается по сигналу
/// `shutdown`.
///
/// Возвращает `JoinHandle`, по которому можно дождаться завершения.
pub fn spawn_producer(
    cache: Arc<AddressCache>,
    dispatcher: Arc<Dispatcher>,
    config: ProducerConfig,
    shutdown: Arc<Notify>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(config.tick);
        info!(
            address_space = config.address_space,
            value_range = config.value_range,
            tick_ms = config.tick.as_millis() as u64,
            "producer started"
        );

        loop {
            select! {
                _ = shutdown.notified() => {
                    info!("producer received shutdown signal");
                    break;
                }
                _ = ticker.tick() => {
                    let value = fastrand::i64(0..config.value_range);
                    let address = fastrand::u32(0..config.address_space);
                    cache.set(address, value);
                    dispatcher.notify(address);
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use tokio::time::{advance, pause, sleep};

    use crate::notify::SubscriberRegistry;

    use super::*;

    fn setup() -> (Arc<AddressCache>, Arc<SubscriberRegistry>, Arc<Dispatcher>) {
        let cache = Arc::new(AddressCache::new());
        let registry = Arc::new(SubscriberRegistry::new());
        let dispatcher = Arc::new(Dispatcher::new(cache.clone(), registry.clone()));
        (cache, registry, dispatcher)
    }

    /// Тест проверяет, что генератор пишет в кэш и дёргает диспетчер
    /// на каждом такте.
    #[tokio::test]
    async fn test_producer_ticks() {
        pause();
        let (cache, _registry, dispatcher) = setup();

        let config = ProducerConfig {
            tick: Duration::from_millis(10),
            address_space: 1, // единственный адрес, чтобы проверить кэш
            value_range: 100,
        };
        let shutdown = Arc::new(Notify::new());
        let handle = spawn_producer(cache.clone(), dispatcher.clone(), config, shutdown.clone());

        // первый тик срабатывает сразу, дальше — по интервалу
        advance(Duration::from_millis(55)).await;
        sleep(Duration::from_millis(1)).await;

        assert!(dispatcher.notify_count.load(Ordering::Relaxed) >= 1);
        assert_eq!(cache.len(), 1);

        shutdown.notify_one();
        handle.await.unwrap();
    }

    /// Тест проверяет, что сигнал завершения останавливает задачу,
    /// даже если он подан до очередного такта.
    #[tokio::test]
    async fn test_producer_stops_on_shutdown() {
        pause();
        let (cache, _registry, dispatcher) = setup();

        let shutdown = Arc::new(Notify::new());
        let handle = spawn_producer(
            cache,
            dispatcher.clone(),
            ProducerConfig::default(),
            shutdown.clone(),
        );

        shutdown.notify_one();
        handle.await.unwrap();

        let after_stop = dispatcher.notify_count.load(Ordering::Relaxed);
        advance(Duration::from_millis(50)).await;
        assert_eq!(dispatcher.notify_count.load(Ordering::Relaxed), after_stop);
    }

    /// Тест проверяет, что сгенерированные значения остаются в своих
    /// диапазонах.
    #[tokio::test]
    async fn test_producer_respects_ranges() {
        pause();
        let (cache, _registry, dispatcher) = setup();

        let config = ProducerConfig {
            tick: Duration::from_millis(1),
            address_space: 4,
            value_range: 10,
        };
        let shutdown = Arc::new(Notify::new());
        let handle = spawn_producer(cache.clone(), dispatcher, config, shutdown.clone());

        advance(Duration::from_millis(200)).await;
        sleep(Duration::from_millis(1)).await;

        shutdown.notify_one();
        handle.await.unwrap();

        assert!(cache.len() <= 4);
        for address in 0..4 {
            let value = cache.get(address);
            assert!((0..10).contains(&value));
        }
    }
}
