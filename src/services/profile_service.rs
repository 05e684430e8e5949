use crate::{
    client::{ApiClient, Payload, with_query},
    dto::profile::{DeliveryInfoUpdate, PasswordChange, ProfileUpdate},
    error::AppResult,
    models::{DeliveryInfo, UserProfile},
};

pub async fn get_profile(api: &ApiClient) -> AppResult<UserProfile> {
    api.get("/user/profile").await
}

pub async fn update_profile(api: &ApiClient, payload: &ProfileUpdate) -> AppResult<UserProfile> {
    payload.validate()?;
    api.patch("/user/profile", Payload::json(payload)?).await
}

pub async fn change_password(api: &ApiClient, payload: &PasswordChange) -> AppResult<()> {
    payload.validate()?;
    api.patch(&with_query("/user/password", &payload.to_query()), Payload::Empty)
        .await
}

/// `None` when the user has never saved delivery details (backend answers 404).
pub async fn get_delivery_info(api: &ApiClient) -> AppResult<Option<DeliveryInfo>> {
    match api.get::<DeliveryInfo>("/user/delivery-info").await {
        Ok(info) => Ok(Some(info)),
        Err(err) if err.is_not_found() => Ok(None),
        Err(err) => Err(err),
    }
}

pub async fn update_delivery_info(
    api: &ApiClient,
    payload: &DeliveryInfoUpdate,
) -> AppResult<DeliveryInfo> {
    payload.validate()?;
    api.put("/user/delivery-info", Payload::json(payload)?).await
}
