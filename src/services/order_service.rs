use crate::{
    client::{ApiClient, Payload},
    error::AppResult,
    models::{Order, OrderStatus},
};

pub async fn list_orders(api: &ApiClient) -> AppResult<Vec<Order>> {
    api.get("/orders").await
}

pub async fn get_order(api: &ApiClient, order_id: i64) -> AppResult<Order> {
    api.get(&format!("/orders/{order_id}")).await
}

pub async fn orders_by_status(api: &ApiClient, status: OrderStatus) -> AppResult<Vec<Order>> {
    api.get(&format!("/orders/status/{status}")).await
}

pub async fn order_history(api: &ApiClient) -> AppResult<Vec<Order>> {
    api.get("/orders/history").await
}

/// Owner-side cancellation; the backend only accepts it while the order is pending.
pub async fn cancel_order(api: &ApiClient, order_id: i64) -> AppResult<Order> {
    api.put(&format!("/orders/{order_id}/cancel"), Payload::Empty).await
}
