use crate::{
    client::{ApiClient, Payload},
    dto::auth::{AuthResponse, LoginRequest, RegisterRequest},
    error::AppResult,
    models::User,
};

pub async fn login(api: &ApiClient, payload: &LoginRequest) -> AppResult<AuthResponse> {
    api.post("/auth/login", Payload::json(payload)?).await
}

pub async fn register(api: &ApiClient, payload: &RegisterRequest) -> AppResult<AuthResponse> {
    api.post("/auth/register", Payload::json(payload)?).await
}

pub async fn logout(api: &ApiClient) -> AppResult<()> {
    api.post("/auth/logout", Payload::Empty).await
}

pub async fn current_user(api: &ApiClient) -> AppResult<User> {
    api.get("/auth/me").await
}
