use std::{sync::Arc, time::Duration};

use tokio::{signal, sync::Notify};
use tracing::{info, warn};

use vestnik::{
    logging::{self, LoggingConfig},
    spawn_producer, AddressCache, AddressSubscriber, DedupFilter, Dispatcher, ProducerConfig,
    Settings, SubscriberRegistry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    logging::init_logging(&LoggingConfig::default()).map_err(|e| anyhow::anyhow!("{e}"))?;

    let cache = Arc::new(AddressCache::new());
    let registry = Arc::new(SubscriberRegistry::new());
    let dispatcher = Arc::new(Dispatcher::new(cache.clone(), registry.clone()));

    // Подписываемся на изменения данных
    let hold = Duration::from_millis(settings.notify_hold_ms);
    for address in settings.subscribe_from..=settings.subscribe_to {
        let subscriber = DedupFilter::new(Box::new(AddressSubscriber::new(address)), hold);
        if let Err(e) = registry.subscribe(Box::new(subscriber)) {
            warn!(address, error = %e, "subscription rejected");
        }
    }
    info!(
        subscribers = registry.subscriber_count(),
        "subscriptions registered"
    );

    // Имитируем изменения данных
    let shutdown = Arc::new(Notify::new());
    let producer = spawn_producer(
        cache,
        dispatcher,
        ProducerConfig {
            tick: Duration::from_millis(settings.producer_tick_ms),
            address_space: settings.address_space,
            value_range: settings.value_range,
        },
        shutdown.clone(),
    );

    signal::ctrl_c().await?;
    info!("shutdown signal received");

    shutdown.notify_one();
    producer.await?;
    registry.shutdown().await;

    Ok(())
}
