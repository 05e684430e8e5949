use crate::{
    client::{ApiClient, Payload, with_query},
    dto::cart::QuantityQuery,
    error::AppResult,
    models::{Cart, Order},
};

pub async fn get_cart(api: &ApiClient) -> AppResult<Cart> {
    api.get("/cart").await
}

pub async fn add_dish(api: &ApiClient, dish_id: i64, quantity: u32) -> AppResult<Cart> {
    let endpoint = with_query(
        &format!("/cart/add/{dish_id}"),
        &QuantityQuery { quantity }.to_query(),
    );
    api.post(&endpoint, Payload::Empty).await
}

pub async fn remove_item(api: &ApiClient, cart_item_id: i64, quantity: u32) -> AppResult<Cart> {
    let endpoint = with_query(
        &format!("/cart/remove/{cart_item_id}"),
        &QuantityQuery { quantity }.to_query(),
    );
    api.delete(&endpoint).await
}

pub async fn clear(api: &ApiClient) -> AppResult<()> {
    api.delete("/cart/clear").await
}

pub async fn checkout(api: &ApiClient) -> AppResult<Order> {
    api.post("/cart/checkout", Payload::Empty).await
}
