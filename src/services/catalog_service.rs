use reqwest::StatusCode;

use crate::{
    client::{ApiClient, with_query},
    error::{AppError, AppResult},
    models::{Dish, Restaurant},
};

pub async fn list_restaurants(api: &ApiClient) -> AppResult<Vec<Restaurant>> {
    api.get("/restaurants").await
}

/// The backend has no single-restaurant endpoint, so this filters the list.
pub async fn get_restaurant(api: &ApiClient, restaurant_id: i64) -> AppResult<Restaurant> {
    list_restaurants(api)
        .await?
        .into_iter()
        .find(|r| r.id == restaurant_id)
        .ok_or_else(|| AppError::Api {
            status: StatusCode::NOT_FOUND,
            message: format!("Restaurant with id {restaurant_id} not found"),
            code: None,
        })
}

pub async fn search_restaurants(api: &ApiClient, name: &str) -> AppResult<Vec<Restaurant>> {
    api.get(&with_query("/restaurants/searchRestaurant", &[("name", name)]))
        .await
}

pub async fn list_dishes(api: &ApiClient, restaurant_id: i64) -> AppResult<Vec<Dish>> {
    api.get(&format!("/restaurants/{restaurant_id}/dishes")).await
}

pub async fn get_dish(api: &ApiClient, restaurant_id: i64, dish_id: i64) -> AppResult<Dish> {
    api.get(&format!("/restaurants/{restaurant_id}/dishes/{dish_id}"))
        .await
}

pub async fn search_dishes_in_restaurant(
    api: &ApiClient,
    restaurant_id: i64,
    dish_name: &str,
) -> AppResult<Vec<Dish>> {
    api.get(&with_query(
        &format!("/restaurants/{restaurant_id}/dishes/searchDish"),
        &[("dishName", dish_name)],
    ))
    .await
}

pub async fn search_dishes(api: &ApiClient, dish_name: &str) -> AppResult<Vec<Dish>> {
    api.get(&with_query("/restaurants/searchDish", &[("dishName", dish_name)]))
        .await
}
