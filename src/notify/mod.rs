//! Подсистема уведомлений об изменении данных.
//!
//! Модуль связывает кэш значений с подписчиками:
//!
//! - `subscriber`: способность «реагировать на изменение по адресу» и
//!   конечный подписчик, пишущий в лог.
//! - `dedup`: декоратор, отбрасывающий повторные одинаковые значения.
//! - `registry`: реестр подписок — на каждый адрес не более одной
//!   подписки со своей очередью доставки и рабочей задачей.
//! - `dispatcher`: сопоставляет адрес с подпиской и ставит уведомление
//!   в очередь, не блокируя вызывающего.
//!
//! Публичный API переэкспортирует основные типы вложенных модулей.

pub mod dedup;
pub mod dispatcher;
pub mod registry;
pub mod subscriber;

pub use dedup::DedupFilter;
pub use dispatcher::Dispatcher;
pub use registry::{DeliveryHandle, SubscriberRegistry};
pub use subscriber::{AddressSubscriber, Subscriber};
