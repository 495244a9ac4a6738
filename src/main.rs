use anyhow::Context;
use tracing::{error, info, Instrument};

use order_processor::app_system::{setup_tracing, AppConfig, ProcessingSystem};
use order_processor::clients::TableLookup;
use order_processor::domain::{LookupResult, Order};

const DEMO_USER: &str = "1";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    setup_tracing(&config.logging.level);

    info!(export_dir = %config.export.directory.display(), "Starting order processor");

    let lookup = TableLookup::new()
        .with_answer("2", LookupResult::success(60.0))
        .with_answer("3", LookupResult::new("fail", 0.0));
    let system = ProcessingSystem::new(&config, lookup);

    let seed = [
        Order::new("1", "A", 180.0, false),
        Order::new("2", "B", 90.0, false),
        Order::new("3", "B", 120.0, true),
        Order::new("4", "B", 40.0, false),
        Order::new("5", "C", 250.0, true),
        Order::new("6", "X", 10.0, false),
    ];
    for order in seed {
        system
            .store_client
            .insert(DEMO_USER, order)
            .await
            .context("seeding orders")?;
    }

    let span = tracing::info_span!("order_processing", user_id = DEMO_USER);
    let result = async {
        info!("Processing orders");
        system.processor.process_orders(DEMO_USER).await
    }
    .instrument(span)
    .await;

    match result {
        Ok(orders) => {
            for order in &orders {
                info!(
                    order_id = %order.id,
                    order_type = %order.order_type,
                    status = %order.status,
                    priority = %order.priority,
                    "Order result"
                );
            }
        }
        Err(e) => error!(error = %e, "Order processing failed"),
    }

    system.shutdown().await.map_err(anyhow::Error::msg)?;

    info!("Application completed successfully");
    Ok(())
}
