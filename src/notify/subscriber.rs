use async_trait::async_trait;
use tracing::info;

use crate::store::{Address, Value};

/// Способность реагировать на изменение данных по адресу.
///
/// Подписчик привязан ровно к одному адресу и получает каждое
/// доставленное значение через `on_data_changed`. Декораторы реализуют
/// тот же трейт и владеют вложенным подписчиком, так что цепочка
/// декоратор → конечный подписчик сама является подписчиком.
///
/// Метод принимает `&mut self`: доставка для одного адреса
/// сериализована рабочей задачей подписки, которая единолично владеет
/// цепочкой.
#[async_trait]
pub trait Subscriber: Send {
    /// Адрес, на изменения которого подписан этот подписчик.
    fn address(&self) -> Address;

    /// Вызывается при доставке нового значения.
    async fn on_data_changed(
        &mut self,
        value: Value,
    );
}

/// Конечный подписчик: пишет сообщение об изменении в лог.
#[derive(Debug)]
pub struct AddressSubscriber {
    address: Address,
}

impl AddressSubscriber {
    pub fn new(address: Address) -> Self {
        Self { address }
    }
}

#[async_trait]
impl Subscriber for AddressSubscriber {
    fn address(&self) -> Address {
        self.address
    }

    async fn on_data_changed(
        &mut self,
        value: Value,
    ) {
        info!(
            "Data at address {} has changed to {}",
            self.address, value
        );
    }
}
