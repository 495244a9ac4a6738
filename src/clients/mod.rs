//! Collaborator interfaces used by the processor, plus the concrete bindings
//! the application wires in.

use async_trait::async_trait;

use crate::domain::{LookupResult, Order, OrderStatus, Priority};
use crate::error::{ExportError, LookupError, StoreError};

pub mod export_sink;
pub mod lookup_client;
pub mod order_store_client;

pub use export_sink::*;
pub use lookup_client::*;
pub use order_store_client::*;

/// Persistence for a user's orders.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn get_orders_by_user(&self, user_id: &str) -> Result<Vec<Order>, StoreError>;

    /// Returns whether the store acknowledged the write.
    async fn update_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
        priority: Priority,
    ) -> Result<bool, StoreError>;
}

/// Remote service consulted for lookup-gated orders.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExternalLookup: Send + Sync {
    async fn call(&self, order_id: &str) -> Result<LookupResult, LookupError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMode {
    /// Create the target, truncating anything already there.
    Write,
    Append,
}

/// Destination for exported order rows.
///
/// Failing to open is an ordinary `Err` value; nothing is written and there
/// is no stream to close.
pub trait ExportSink: Send + Sync {
    fn open(&self, name: &str, mode: ExportMode) -> Result<Box<dyn ExportStream>, ExportError>;
}

/// An open export. Rows are written in order and flushed on `close`.
pub trait ExportStream: Send {
    fn write_row(&mut self, fields: &[&str]) -> Result<(), ExportError>;
    fn close(self: Box<Self>) -> Result<(), ExportError>;
}
