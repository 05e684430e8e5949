use crate::{
    client::ApiClient,
    error::{AppError, AppResult},
    models::Order,
    services::profile_service,
    stores::cart::CartStore,
};

pub const INCOMPLETE_PROFILE_MESSAGE: &str = "Please fill in your phone and address";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutReadiness {
    pub has_items: bool,
    pub profile_complete: bool,
}

impl CheckoutReadiness {
    pub fn can_checkout(&self) -> bool {
        self.has_items && self.profile_complete
    }
}

/// Checkout screen: gates on delivery details before handing over to the cart.
#[derive(Debug, Clone)]
pub struct CheckoutFlow {
    api: ApiClient,
    cart: CartStore,
}

impl CheckoutFlow {
    pub fn new(api: ApiClient, cart: CartStore) -> Self {
        Self { api, cart }
    }

    pub async fn readiness(&self) -> AppResult<CheckoutReadiness> {
        let delivery = profile_service::get_delivery_info(&self.api).await?;
        let has_items = self.cart.cart().is_some_and(|cart| !cart.is_empty());
        Ok(CheckoutReadiness {
            has_items,
            profile_complete: delivery.as_ref().is_some_and(|info| info.is_complete()),
        })
    }

    pub async fn can_checkout(&self) -> AppResult<bool> {
        Ok(self.readiness().await?.can_checkout())
    }

    pub async fn place_order(&self) -> AppResult<Order> {
        let readiness = self.readiness().await?;
        if !readiness.profile_complete {
            return Err(AppError::BadRequest(INCOMPLETE_PROFILE_MESSAGE.into()));
        }
        self.cart.checkout().await
    }
}
