/// Service configuration loading.
pub mod config;
/// Common error types for the notification subsystem.
pub mod error;
/// Flexible logging (console sink, env filter).
pub mod logging;
/// Notifications: Subscriber, DedupFilter, SubscriberRegistry, Dispatcher.
pub mod notify;
/// Simulated change-event generator.
pub mod producer;
/// Address/value types and the last-value cache.
pub mod store;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// config
pub use config::Settings;
/// Operation errors and result types.
pub use error::{NotifyError, NotifyResult};
/// Notification API.
pub use notify::{
    AddressSubscriber, DedupFilter, DeliveryHandle, Dispatcher, Subscriber, SubscriberRegistry,
};
/// Change-event generator.
pub use producer::{spawn_producer, ProducerConfig};
/// Last-value cache and its base types.
pub use store::{Address, AddressCache, Value, DEFAULT_VALUE};
