//! The order rule engine.
//!
//! One pass fetches a user's orders, classifies each one, recomputes its
//! priority and persists the outcome. Every per-order failure is folded into
//! that order's status; only the initial fetch can fail the pass.

use tracing::{error, info, instrument, warn};

use crate::clients::{ExportMode, ExportSink, ExportStream, ExternalLookup, RecordStore};
use crate::domain::{LookupResult, Order, OrderStatus, OrderType, Priority};
use crate::error::{ExportError, ProcessError};

/// Amount above which an exported order gets the high value annotation.
pub const EXPORT_ANNOTATION_AMOUNT: f64 = 150.0;
/// Lookup payload at or above which an order may be processed straight away.
pub const LOOKUP_PAYLOAD_FLOOR: f64 = 50.0;
/// Amount below which a good lookup payload processes the order.
pub const LOOKUP_AMOUNT_CEILING: f64 = 100.0;

pub const EXPORT_HEADER: [&str; 6] = ["ID", "Type", "Amount", "Flag", "Status", "Priority"];
pub const HIGH_VALUE_NOTE: [&str; 6] = ["", "", "", "", "Note", "High value order"];

#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// Prefix of export file names; the user id and a unix timestamp follow.
    pub export_prefix: String,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            export_prefix: "orders_type_A".to_string(),
        }
    }
}

/// Applies the status rules to one user's orders at a time.
pub struct OrderProcessor<S, L, E> {
    store: S,
    lookup: L,
    export_sink: E,
    config: ProcessorConfig,
}

impl<S, L, E> OrderProcessor<S, L, E>
where
    S: RecordStore,
    L: ExternalLookup,
    E: ExportSink,
{
    pub fn new(store: S, lookup: L, export_sink: E) -> Self {
        Self::with_config(store, lookup, export_sink, ProcessorConfig::default())
    }

    pub fn with_config(store: S, lookup: L, export_sink: E, config: ProcessorConfig) -> Self {
        Self {
            store,
            lookup,
            export_sink,
            config,
        }
    }

    /// Processes every order of `user_id`, in the order the store returns them.
    ///
    /// # Errors
    /// Returns [`ProcessError::FetchFailed`] when the orders cannot be fetched.
    /// Nothing else fails the pass.
    #[instrument(skip(self))]
    pub async fn process_orders(&self, user_id: &str) -> Result<Vec<Order>, ProcessError> {
        let mut orders = self.store.get_orders_by_user(user_id).await.map_err(|source| {
            error!(error = %source, "Fetching orders failed");
            ProcessError::FetchFailed {
                user_id: user_id.to_string(),
                source,
            }
        })?;

        info!(count = orders.len(), "Processing orders");
        for order in orders.iter_mut() {
            self.process_order(user_id, order).await;
        }
        Ok(orders)
    }

    #[instrument(skip_all, fields(order_id = %order.id, order_type = %order.order_type))]
    async fn process_order(&self, user_id: &str, order: &mut Order) {
        order.status = match &order.order_type {
            OrderType::A => self.export_order(user_id, order),
            OrderType::B => self.lookup_order(order).await,
            OrderType::C => classify_flag(order.flag),
            OrderType::Other(_) => OrderStatus::UnknownType,
        };
        order.priority = Priority::for_amount(order.amount);

        match self
            .store
            .update_order_status(&order.id, order.status, order.priority)
            .await
        {
            Ok(true) => {}
            Ok(false) => warn!("Store did not acknowledge status update"),
            Err(e) => {
                warn!(error = %e, status = %order.status, "Persisting status failed");
                order.status = OrderStatus::DbError;
            }
        }

        info!(status = %order.status, priority = %order.priority, "Order processed");
    }

    fn export_order(&self, user_id: &str, order: &Order) -> OrderStatus {
        let name = self.export_name(user_id);
        let stream = match self.export_sink.open(&name, ExportMode::Write) {
            Ok(stream) => stream,
            Err(e) => {
                warn!(error = %e, "Export could not be opened");
                return OrderStatus::ExportFailed;
            }
        };

        match write_export(stream, order) {
            Ok(()) => OrderStatus::Exported,
            Err(e) => {
                warn!(error = %e, export = %name, "Export incomplete");
                OrderStatus::ExportFailed
            }
        }
    }

    async fn lookup_order(&self, order: &Order) -> OrderStatus {
        match self.lookup.call(&order.id).await {
            Ok(result) => classify_lookup(&result, order.amount, order.flag),
            Err(e) => {
                warn!(error = %e, "Lookup call failed");
                OrderStatus::ApiFailure
            }
        }
    }

    fn export_name(&self, user_id: &str) -> String {
        format!(
            "{}_{}_{}.csv",
            self.config.export_prefix,
            user_id,
            chrono::Utc::now().timestamp()
        )
    }
}

/// Writes the header, the order row and, for high value orders, the note
/// row, then closes the stream. The order row reflects the order as it was
/// before this pass changed it.
fn write_export(mut stream: Box<dyn ExportStream>, order: &Order) -> Result<(), ExportError> {
    let amount = order.amount.to_string();
    stream.write_row(&EXPORT_HEADER)?;
    stream.write_row(&[
        order.id.as_str(),
        order.order_type.as_str(),
        amount.as_str(),
        if order.flag { "true" } else { "false" },
        order.status.as_str(),
        order.priority.as_str(),
    ])?;
    if order.amount > EXPORT_ANNOTATION_AMOUNT {
        stream.write_row(&HIGH_VALUE_NOTE)?;
    }
    stream.close()
}

/// Status for a lookup-gated order. The first matching rule wins.
pub fn classify_lookup(result: &LookupResult, amount: f64, flag: bool) -> OrderStatus {
    if !result.is_success() {
        return OrderStatus::ApiError;
    }
    if result.payload >= LOOKUP_PAYLOAD_FLOOR && amount < LOOKUP_AMOUNT_CEILING {
        OrderStatus::Processed
    } else if result.payload < LOOKUP_PAYLOAD_FLOOR || flag {
        OrderStatus::Pending
    } else {
        OrderStatus::Error
    }
}

pub fn classify_flag(flag: bool) -> OrderStatus {
    if flag {
        OrderStatus::Completed
    } else {
        OrderStatus::InProgress
    }
}
