use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::store::{Address, Value, DEFAULT_VALUE};

use super::Subscriber;

/// Декоратор, отбрасывающий повторные одинаковые значения.
///
/// Оборачивает подписчика и пересылает ему значение только тогда,
/// когда оно отличается от последнего пересланного. Оба поля состояния
/// стартуют с [`DEFAULT_VALUE`], поэтому первое значение, равное нулю,
/// тоже считается «без изменений» и не пересылается.
///
/// После каждого уведомления (пересланного или подавленного)
/// выдерживается настраиваемая пауза `hold`; `Duration::ZERO` её
/// отключает.
pub struct DedupFilter {
    inner: Box<dyn Subscriber>,
    current: Value,
    last: Value,
    hold: Duration,
}

impl DedupFilter {
    /// Оборачивает подписчика с указанной паузой после уведомления.
    pub fn new(
        inner: Box<dyn Subscriber>,
        hold: Duration,
    ) -> Self {
        Self {
            inner,
            current: DEFAULT_VALUE,
            last: DEFAULT_VALUE,
            hold,
        }
    }

    fn changed(&self) -> bool {
        self.current != self.last
    }
}

#[async_trait]
impl Subscriber for DedupFilter {
    fn address(&self) -> Address {
        self.inner.address()
    }

    async fn on_data_changed(
        &mut self,
        value: Value,
    ) {
        self.current = value;

        if self.changed() {
            self.inner.on_data_changed(self.current).await;
            self.last = self.current;
        } else {
            debug!(
                address = self.address(),
                value, "value unchanged, delivery suppressed"
            );
        }

        if !self.hold.is_zero() {
            tokio::time::sleep(self.hold).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    struct Recorder {
        address: Address,
        seen: Arc<Mutex<Vec<Value>>>,
    }

    #[async_trait]
    impl Subscriber for Recorder {
        fn address(&self) -> Address {
            self.address
        }

        async fn on_data_changed(
            &mut self,
            value: Value,
        ) {
            self.seen.lock().unwrap().push(value);
        }
    }

    fn filtered_recorder(address: Address) -> (DedupFilter, Arc<Mutex<Vec<Value>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let filter = DedupFilter::new(
            Box::new(Recorder {
                address,
                seen: seen.clone(),
            }),
            Duration::ZERO,
        );
        (filter, seen)
    }

    /// Тест проверяет, что новое значение пересылается, а повтор того
    /// же значения подавляется.
    #[tokio::test]
    async fn test_forwards_changed_and_suppresses_repeat() {
        let (mut filter, seen) = filtered_recorder(5);

        filter.on_data_changed(42).await;
        filter.on_data_changed(42).await;

        assert_eq!(*seen.lock().unwrap(), vec![42]);
    }

    /// Тест проверяет, что после пересылки `last` обновляется: другое
    /// значение снова проходит, возврат к прежнему — тоже.
    #[tokio::test]
    async fn test_last_value_tracks_forwarded() {
        let (mut filter, seen) = filtered_recorder(5);

        filter.on_data_changed(1).await;
        filter.on_data_changed(2).await;
        filter.on_data_changed(1).await;

        assert_eq!(*seen.lock().unwrap(), vec![1, 2, 1]);
    }

    /// Тест проверяет граничный случай: свежий фильтр стартует с нуля,
    /// поэтому нулевое значение не пересылается ни разу.
    #[tokio::test]
    async fn test_zero_value_on_fresh_filter_not_forwarded() {
        let (mut filter, seen) = filtered_recorder(5);

        filter.on_data_changed(0).await;
        filter.on_data_changed(0).await;

        assert!(seen.lock().unwrap().is_empty());

        // после ненулевого значения ноль снова считается изменением
        filter.on_data_changed(7).await;
        filter.on_data_changed(0).await;
        assert_eq!(*seen.lock().unwrap(), vec![7, 0]);
    }

    /// Тест проверяет, что декоратор пробрасывает адрес вложенного
    /// подписчика.
    #[tokio::test]
    async fn test_address_passthrough() {
        let (filter, _seen) = filtered_recorder(9);
        assert_eq!(filter.address(), 9);
    }

    /// Тест проверяет, что пауза выдерживается и после подавленного
    /// уведомления. Часы остановлены, sleep продвигает их ровно на
    /// величину паузы.
    #[tokio::test(start_paused = true)]
    async fn test_hold_applies_to_suppressed_delivery() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut filter = DedupFilter::new(
            Box::new(Recorder {
                address: 5,
                seen: seen.clone(),
            }),
            Duration::from_secs(1),
        );

        let started = tokio::time::Instant::now();
        filter.on_data_changed(3).await;
        filter.on_data_changed(3).await;

        assert_eq!(started.elapsed(), Duration::from_secs(2));
        assert_eq!(*seen.lock().unwrap(), vec![3]);
    }
}
