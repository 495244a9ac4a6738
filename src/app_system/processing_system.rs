use tracing::{error, info};

use crate::app_system::AppConfig;
use crate::clients::{ExternalLookup, FileExportSink, OrderStoreClient};
use crate::processor::OrderProcessor;
use crate::store_actor::OrderStoreActor;

const STORE_BUFFER_SIZE: usize = 32;

/// Starts the store actor and wires the processor to it.
///
/// The lookup binding is supplied by the caller; the store and the export
/// sink come from configuration.
pub struct ProcessingSystem<L> {
    pub store_client: OrderStoreClient,
    pub processor: OrderProcessor<OrderStoreClient, L, FileExportSink>,
    handle: tokio::task::JoinHandle<()>,
}

impl<L: ExternalLookup> ProcessingSystem<L> {
    pub fn new(config: &AppConfig, lookup: L) -> Self {
        let (store_actor, store_client) = OrderStoreActor::new(STORE_BUFFER_SIZE);
        let handle = tokio::spawn(store_actor.run());

        let export_sink = FileExportSink::new(&config.export.directory);
        let processor = OrderProcessor::with_config(
            store_client.clone(),
            lookup,
            export_sink,
            config.processor_config(),
        );

        Self {
            store_client,
            processor,
            handle,
        }
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        // The actor stops once every client handle is gone.
        drop(self.processor);
        drop(self.store_client);

        if let Err(e) = self.handle.await {
            error!("Store actor failed: {:?}", e);
            return Err(format!("Store actor failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
