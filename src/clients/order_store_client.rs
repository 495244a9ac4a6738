use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use super::RecordStore;
use crate::domain::{Order, OrderStatus, Priority};
use crate::error::StoreError;
use crate::store_actor::StoreRequest;

/// Sends a request to the store actor and waits for the reply.
macro_rules! store_call {
    ($sender:expr, $variant:ident { $($field:ident),* }) => {{
        let (respond_to, response) = oneshot::channel();
        $sender
            .send(StoreRequest::$variant { $($field,)* respond_to })
            .await
            .map_err(|_| StoreError::ActorCommunication("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| StoreError::ActorCommunication("Actor dropped".to_string()))?
    }};
}

/// Handle to a running [`OrderStoreActor`](crate::store_actor::OrderStoreActor).
#[derive(Clone)]
pub struct OrderStoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl OrderStoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub async fn insert(&self, user_id: &str, order: Order) -> Result<(), StoreError> {
        debug!("Sending request");
        let user_id = user_id.to_string();
        store_call!(self.sender, Insert { user_id, order })
    }

    /// Reads one stored order back, as last persisted.
    #[instrument(skip(self))]
    pub async fn snapshot(&self, order_id: &str) -> Result<Option<Order>, StoreError> {
        debug!("Sending request");
        let order_id = order_id.to_string();
        store_call!(self.sender, Snapshot { order_id })
    }
}

#[async_trait]
impl RecordStore for OrderStoreClient {
    #[instrument(skip(self))]
    async fn get_orders_by_user(&self, user_id: &str) -> Result<Vec<Order>, StoreError> {
        debug!("Sending request");
        let user_id = user_id.to_string();
        store_call!(self.sender, GetOrdersByUser { user_id })
    }

    #[instrument(skip(self))]
    async fn update_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
        priority: Priority,
    ) -> Result<bool, StoreError> {
        debug!("Sending request");
        let order_id = order_id.to_string();
        store_call!(self.sender, UpdateOrderStatus { order_id, status, priority })
    }
}
