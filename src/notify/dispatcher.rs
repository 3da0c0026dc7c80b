use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use tracing::{debug, warn};

use crate::store::{Address, AddressCache};

use super::SubscriberRegistry;

/// Диспетчер уведомлений.
///
/// Сопоставляет изменённый адрес с подпиской и ставит текущее значение
/// из кэша в её очередь доставки. Не блокирует вызывающего дольше
/// постановки в очередь и не меняет ни кэш, ни реестр.
#[derive(Debug)]
pub struct Dispatcher {
    cache: Arc<AddressCache>,
    registry: Arc<SubscriberRegistry>,
    /// Общее количество вызовов `notify`.
    pub notify_count: AtomicUsize,
    /// Количество уведомлений без подписчика.
    pub no_subscriber_count: AtomicUsize,
}

impl Dispatcher {
    /// Создаёт диспетчер поверх общего кэша и реестра.
    pub fn new(
        cache: Arc<AddressCache>,
        registry: Arc<SubscriberRegistry>,
    ) -> Self {
        Self {
            cache,
            registry,
            notify_count: AtomicUsize::new(0),
            no_subscriber_count: AtomicUsize::new(0),
        }
    }

    /// Уведомляет подписчика адреса об изменении данных.
    ///
    /// Значение читается из кэша в момент вызова и ставится в очередь
    /// доставки. Отсутствие подписчика — штатное состояние: пишется
    /// диагностика, вызывающий продолжает работу. Закрытая очередь
    /// (подписка уже остановлена) логируется и игнорируется.
    pub fn notify(
        &self,
        address: Address,
    ) {
        self.notify_count.fetch_add(1, Ordering::Relaxed);

        let Some(handle) = self.registry.lookup(address) else {
            self.no_subscriber_count.fetch_add(1, Ordering::Relaxed);
            debug!(address, "no subscriber for address");
            return;
        };

        let value = self.cache.get(address);
        if let Err(e) = handle.deliver(value) {
            warn!(address, error = %e, "delivery queue closed, notification dropped");
        }
    }
}
