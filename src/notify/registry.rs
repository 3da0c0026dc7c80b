use std::time::Instant;

use dashmap::{mapref::entry::Entry, DashMap};
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{debug, info};

use crate::{
    error::{NotifyError, NotifyResult},
    store::{Address, Value},
};

use super::Subscriber;

/// Реестр подписок.
///
/// На каждый адрес допускается не более одной подписки; при конфликте
/// побеждает первая (insert-if-absent). Каждая подписка владеет
/// очередью доставки и рабочей задачей, которая единолично владеет
/// цепочкой подписчика и обрабатывает уведомления строго по одному,
/// в порядке постановки в очередь.
#[derive(Debug, Default)]
pub struct SubscriberRegistry {
    entries: DashMap<Address, Subscription>,
}

/// Активная подписка: отправитель очереди доставки и её рабочая задача.
#[derive(Debug)]
struct Subscription {
    tx: mpsc::UnboundedSender<Value>,
    worker: JoinHandle<()>,
}

/// Ручка очереди доставки, выдаваемая `lookup`.
///
/// Клонируется дёшево; `deliver` не блокирует (очередь не ограничена,
/// контроль обратного давления — вне задач системы).
#[derive(Debug, Clone)]
pub struct DeliveryHandle {
    address: Address,
    tx: mpsc::UnboundedSender<Value>,
}

impl DeliveryHandle {
    /// Адрес подписки, которой принадлежит очередь.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Ставит значение в очередь доставки.
    ///
    /// # Возвращает
    /// - `Ok(())`, если уведомление принято в очередь;
    /// - `Err(NotifyError::SubscriberGone)`, если рабочая задача уже
    ///   остановлена.
    pub fn deliver(
        &self,
        value: Value,
    ) -> NotifyResult<()> {
        self.tx
            .send(value)
            .map_err(|_| NotifyError::SubscriberGone(self.address))
    }
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl SubscriberRegistry {
    /// Создаёт новый пустой реестр.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Регистрирует подписчика по его адресу.
    ///
    /// Запускает рабочую задачу подписки, поэтому вызывается в
    /// контексте Tokio runtime.
    ///
    /// # Возвращает
    /// - `Ok(())`, если адрес был свободен и подписка создана;
    /// - `Err(NotifyError::AddressTaken)`, если адрес уже занят —
    ///   переданный подписчик при этом отбрасывается.
    pub fn subscribe(
        &self,
        subscriber: Box<dyn Subscriber>,
    ) -> NotifyResult<()> {
        let address = subscriber.address();

        match self.entries.entry(address) {
            Entry::Occupied(_) => Err(NotifyError::AddressTaken(address)),
            Entry::Vacant(slot) => {
                let (tx, rx) = mpsc::unbounded_channel();
                let worker = tokio::spawn(run_delivery_loop(subscriber, rx));
                slot.insert(Subscription { tx, worker });
                debug!(address, "subscriber registered");
                Ok(())
            }
        }
    }

    /// Удаляет подписку по адресу.
    ///
    /// Отправитель очереди при этом уничтожается: рабочая задача
    /// дорабатывает уже поставленные уведомления и завершается.
    ///
    /// # Возвращает
    /// - `true`, если подписка была и удалена;
    /// - `false`, если адрес не был занят.
    pub fn unsubscribe(
        &self,
        address: Address,
    ) -> bool {
        let removed = self.entries.remove(&address).is_some();
        if removed {
            debug!(address, "subscriber removed");
        }
        removed
    }

    /// Возвращает ручку очереди доставки по адресу.
    ///
    /// # Возвращает
    /// - `Some(DeliveryHandle)`, если подписка есть;
    /// - `None`, если адрес не занят.
    pub fn lookup(
        &self,
        address: Address,
    ) -> Option<DeliveryHandle> {
        self.entries.get(&address).map(|entry| DeliveryHandle {
            address,
            tx: entry.tx.clone(),
        })
    }

    /// Возвращает количество активных подписок.
    pub fn subscriber_count(&self) -> usize {
        self.entries.len()
    }

    /// Снимает все подписки и дожидается их рабочих задач.
    ///
    /// Каждая задача перед завершением дорабатывает свою очередь,
    /// поэтому после возврата все принятые уведомления доставлены.
    pub async fn shutdown(&self) {
        let addresses: Vec<Address> = self.entries.iter().map(|entry| *entry.key()).collect();

        let mut workers = Vec::with_capacity(addresses.len());
        for address in addresses {
            if let Some((_, subscription)) = self.entries.remove(&address) {
                let Subscription { tx, worker } = subscription;
                drop(tx);
                workers.push(worker);
            }
        }

        for worker in workers {
            let _ = worker.await;
        }
    }
}

/// Цикл доставки одной подписки.
///
/// Задача единолично владеет цепочкой подписчика: доставки для одного
/// адреса не перекрываются и идут в порядке очереди. Время каждой
/// доставки замеряется и пишется в лог.
async fn run_delivery_loop(
    mut subscriber: Box<dyn Subscriber>,
    mut rx: mpsc::UnboundedReceiver<Value>,
) {
    let address = subscriber.address();

    while let Some(value) = rx.recv().await {
        let started = Instant::now();
        subscriber.on_data_changed(value).await;
        info!(
            address,
            value,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "delivery finished"
        );
    }

    debug!(address, "delivery worker stopped");
}
