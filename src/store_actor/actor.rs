use std::collections::HashMap;

use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use super::messages::StoreRequest;
use crate::clients::OrderStoreClient;
use crate::domain::{Order, OrderStatus, Priority};
use crate::error::StoreError;

struct StoredOrder {
    user_id: String,
    order: Order,
}

/// In-memory order store running as an actor.
///
/// Orders are kept in insertion order so a user's orders always come back
/// in the sequence they were recorded.
pub struct OrderStoreActor {
    receiver: mpsc::Receiver<StoreRequest>,
    orders: Vec<StoredOrder>,
    index: HashMap<String, usize>,
}

impl OrderStoreActor {
    pub fn new(buffer_size: usize) -> (Self, OrderStoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            orders: Vec::new(),
            index: HashMap::new(),
        };
        (actor, OrderStoreClient::new(sender))
    }

    /// Serves requests until every client has been dropped.
    #[instrument(name = "order_store", skip(self))]
    pub async fn run(mut self) {
        info!("OrderStore starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Insert { user_id, order, respond_to } => {
                    let _ = respond_to.send(self.handle_insert(user_id, order));
                }
                StoreRequest::GetOrdersByUser { user_id, respond_to } => {
                    let _ = respond_to.send(Ok(self.handle_get_orders_by_user(&user_id)));
                }
                StoreRequest::UpdateOrderStatus { order_id, status, priority, respond_to } => {
                    let _ = respond_to.send(self.handle_update_status(&order_id, status, priority));
                }
                StoreRequest::Snapshot { order_id, respond_to } => {
                    let order = self
                        .index
                        .get(&order_id)
                        .map(|&slot| self.orders[slot].order.clone());
                    let _ = respond_to.send(Ok(order));
                }
            }
        }
        info!("OrderStore stopped");
    }

    fn handle_insert(&mut self, user_id: String, order: Order) -> Result<(), StoreError> {
        if self.index.contains_key(&order.id) {
            return Err(StoreError::DatabaseError(format!("Duplicate order id: {}", order.id)));
        }
        debug!(order_id = %order.id, user_id = %user_id, "Inserting order");
        self.index.insert(order.id.clone(), self.orders.len());
        self.orders.push(StoredOrder { user_id, order });
        Ok(())
    }

    fn handle_get_orders_by_user(&self, user_id: &str) -> Vec<Order> {
        let orders: Vec<Order> = self
            .orders
            .iter()
            .filter(|stored| stored.user_id == user_id)
            .map(|stored| stored.order.clone())
            .collect();
        debug!(user_id, count = orders.len(), "Orders fetched");
        orders
    }

    fn handle_update_status(
        &mut self,
        order_id: &str,
        status: OrderStatus,
        priority: Priority,
    ) -> Result<bool, StoreError> {
        let slot = *self
            .index
            .get(order_id)
            .ok_or_else(|| StoreError::NotFound(order_id.to_string()))?;
        let order = &mut self.orders[slot].order;
        order.status = status;
        order.priority = priority;
        debug!(order_id, %status, %priority, "Order status stored");
        Ok(true)
    }
}
