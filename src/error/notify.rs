use thiserror::Error;

use crate::store::Address;

pub type NotifyResult<T> = Result<T, NotifyError>;

/// Ошибки подсистемы уведомлений.
///
/// Все эти состояния «мягкие»: на уровне процесса они логируются и
/// игнорируются, ничего не падает и не ретраится. Типизированный
/// результат нужен вызывающему коду и тестам.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyError {
    #[error("address {0} already has a subscriber")]
    AddressTaken(Address),

    #[error("subscriber for address {0} is gone")]
    SubscriberGone(Address),
}
