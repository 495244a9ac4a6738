use tokio::sync::oneshot;

use crate::domain::{Order, OrderStatus, Priority};
use crate::error::StoreError;

pub type StoreResponse<T> = oneshot::Sender<Result<T, StoreError>>;

/// Typed requests for the order store actor. Each variant carries its
/// parameters and a oneshot channel for the reply.
#[derive(Debug)]
pub enum StoreRequest {
    Insert {
        user_id: String,
        order: Order,
        respond_to: StoreResponse<()>,
    },
    GetOrdersByUser {
        user_id: String,
        respond_to: StoreResponse<Vec<Order>>,
    },
    UpdateOrderStatus {
        order_id: String,
        status: OrderStatus,
        priority: Priority,
        respond_to: StoreResponse<bool>,
    },
    Snapshot {
        order_id: String,
        respond_to: StoreResponse<Option<Order>>,
    },
}
