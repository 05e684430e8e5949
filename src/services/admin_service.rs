use reqwest::multipart::{Form, Part};
use serde::Serialize;

use crate::{
    client::{ApiClient, Payload, with_query},
    dto::{
        admin::{DishForm, ImageUpload, RestaurantForm},
        orders::AdminOrderQuery,
    },
    error::{AppError, AppResult},
    models::{Dish, Order, OrderStatus, Restaurant, User},
    response::JSON_CONTENT_TYPE,
};

pub async fn create_restaurant(
    api: &ApiClient,
    form: &RestaurantForm,
    image: Option<ImageUpload>,
) -> AppResult<Restaurant> {
    form.validate(image.is_some())?;
    let body = multipart_form("restaurant", form, image)?;
    api.post("/admin/restaurants", body).await
}

pub async fn update_restaurant(
    api: &ApiClient,
    restaurant_id: i64,
    form: &RestaurantForm,
    image: Option<ImageUpload>,
) -> AppResult<Restaurant> {
    form.validate(image.is_some())?;
    let body = multipart_form("restaurant", form, image)?;
    api.put(&format!("/admin/restaurants/{restaurant_id}"), body)
        .await
}

pub async fn delete_restaurant(api: &ApiClient, restaurant_id: i64) -> AppResult<()> {
    api.delete(&format!("/admin/restaurants/{restaurant_id}"))
        .await
}

pub async fn create_dish(
    api: &ApiClient,
    restaurant_id: i64,
    form: &DishForm,
    image: Option<ImageUpload>,
) -> AppResult<Dish> {
    form.validate(image.is_some())?;
    let body = multipart_form("dish", form, image)?;
    api.post(&format!("/admin/restaurants/{restaurant_id}/dishes"), body)
        .await
}

pub async fn update_dish(
    api: &ApiClient,
    dish_id: i64,
    form: &DishForm,
    image: Option<ImageUpload>,
) -> AppResult<Dish> {
    form.validate(image.is_some())?;
    let body = multipart_form("dish", form, image)?;
    api.put(&format!("/admin/dishes/{dish_id}"), body).await
}

pub async fn delete_dish(api: &ApiClient, dish_id: i64) -> AppResult<()> {
    api.delete(&format!("/admin/dishes/{dish_id}")).await
}

pub async fn list_orders(api: &ApiClient, query: &AdminOrderQuery) -> AppResult<Vec<Order>> {
    api.get(&with_query("/admin/orders", &query.to_query())).await
}

/// Any status may be set from any other; transitions are not checked here.
pub async fn update_order_status(
    api: &ApiClient,
    order_id: i64,
    status: OrderStatus,
) -> AppResult<Order> {
    let endpoint = with_query(
        &format!("/admin/orders/{order_id}/status"),
        &[("status", status.as_str())],
    );
    api.patch(&endpoint, Payload::Empty).await
}

pub async fn list_users(api: &ApiClient) -> AppResult<Vec<User>> {
    api.get("/admin/users").await
}

pub async fn delete_user(api: &ApiClient, user_id: i64) -> AppResult<()> {
    api.delete(&format!("/admin/users/{user_id}")).await
}

/// JSON blob part named `name`, plus an optional `image` file part.
fn multipart_form<T: Serialize>(
    name: &'static str,
    value: &T,
    image: Option<ImageUpload>,
) -> AppResult<Payload> {
    let json = serde_json::to_string(value)?;
    let blob = Part::text(json)
        .mime_str(JSON_CONTENT_TYPE)
        .map_err(|err| AppError::BadRequest(err.to_string()))?;
    let mut form = Form::new().part(name, blob);

    if let Some(ImageUpload {
        file_name,
        mime,
        bytes,
    }) = image
    {
        let file = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(&mime)
            .map_err(|err| AppError::BadRequest(format!("invalid image type {mime}: {err}")))?;
        form = form.part("image", file);
    }

    Ok(Payload::Multipart(form))
}
