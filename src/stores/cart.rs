use std::{future::Future, sync::Arc};

use rust_decimal::Decimal;
use tokio::sync::watch;

use crate::{
    client::ApiClient,
    error::{AppError, AppResult},
    models::{Cart, Order},
    services::cart_service,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    pub cart: Option<Cart>,
    pub is_loading: bool,
}

/// The signed-in user's cart as last returned by the backend.
///
/// Every mutation replaces the whole snapshot with the server's answer; no
/// quantity or price arithmetic happens here. Concurrent mutations are not
/// coordinated, so whichever response lands last wins.
#[derive(Debug, Clone)]
pub struct CartStore {
    api: ApiClient,
    state: Arc<watch::Sender<CartState>>,
}

impl CartStore {
    pub fn new(api: ApiClient) -> Self {
        let (state, _) = watch::channel(CartState::default());
        Self {
            api,
            state: Arc::new(state),
        }
    }

    pub fn snapshot(&self) -> CartState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CartState> {
        self.state.subscribe()
    }

    pub fn cart(&self) -> Option<Cart> {
        self.state.borrow().cart.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn item_count(&self) -> u32 {
        self.state.borrow().cart.as_ref().map_or(0, Cart::item_count)
    }

    pub fn total(&self) -> Decimal {
        self.state
            .borrow()
            .cart
            .as_ref()
            .map_or(Decimal::ZERO, |cart| cart.total)
    }

    pub fn quantity_of(&self, dish_id: i64) -> u32 {
        self.state
            .borrow()
            .cart
            .as_ref()
            .and_then(|cart| cart.find_by_dish(dish_id))
            .map_or(0, |item| item.quantity)
    }

    pub async fn fetch_cart(&self) -> AppResult<Cart> {
        self.replace_with("fetch cart", cart_service::get_cart(&self.api))
            .await
    }

    pub async fn add_to_cart(&self, dish_id: i64, quantity: u32) -> AppResult<Cart> {
        ensure_positive(quantity)?;
        self.replace_with(
            "add to cart",
            cart_service::add_dish(&self.api, dish_id, quantity),
        )
        .await
    }

    pub async fn remove_item(&self, cart_item_id: i64, quantity: u32) -> AppResult<Cart> {
        ensure_positive(quantity)?;
        self.replace_with(
            "remove from cart",
            cart_service::remove_item(&self.api, cart_item_id, quantity),
        )
        .await
    }

    pub async fn clear_cart(&self) -> AppResult<()> {
        self.set_loading(true);
        match cart_service::clear(&self.api).await {
            Ok(()) => {
                self.drop_cart();
                Ok(())
            }
            Err(err) => {
                self.set_loading(false);
                tracing::error!(error = %err, "failed to clear cart");
                Err(err)
            }
        }
    }

    /// Converts the cart into an order. On failure the cart is left as last fetched.
    pub async fn checkout(&self) -> AppResult<Order> {
        let known_empty = self.state.borrow().cart.as_ref().is_some_and(Cart::is_empty);
        if known_empty {
            return Err(AppError::BadRequest("Cannot checkout with empty cart".into()));
        }

        self.set_loading(true);
        match cart_service::checkout(&self.api).await {
            Ok(order) => {
                tracing::info!(order_id = order.order_id, total = %order.total, "order placed");
                self.drop_cart();
                Ok(order)
            }
            Err(err) => {
                self.set_loading(false);
                tracing::error!(error = %err, "failed to checkout");
                Err(err)
            }
        }
    }

    /// Forgets the local cart without touching the backend (logout).
    pub fn reset(&self) {
        self.state.send_replace(CartState::default());
    }

    async fn replace_with<F>(&self, action: &'static str, request: F) -> AppResult<Cart>
    where
        F: Future<Output = AppResult<Cart>>,
    {
        self.set_loading(true);
        match request.await {
            Ok(cart) => {
                if !cart.is_consistent() {
                    tracing::warn!(
                        cart_id = cart.cart_id,
                        total = %cart.total,
                        "cart snapshot totals do not add up"
                    );
                }
                self.state.send_modify(|state| {
                    state.cart = Some(cart.clone());
                    state.is_loading = false;
                });
                Ok(cart)
            }
            Err(err) => {
                self.set_loading(false);
                tracing::error!(error = %err, "failed to {action}");
                Err(err)
            }
        }
    }

    fn drop_cart(&self) {
        self.state.send_modify(|state| {
            state.cart = None;
            state.is_loading = false;
        });
    }

    fn set_loading(&self, loading: bool) {
        self.state.send_modify(|state| state.is_loading = loading);
    }
}

fn ensure_positive(quantity: u32) -> AppResult<()> {
    if quantity == 0 {
        return Err(AppError::BadRequest(
            "quantity must be greater than 0".to_string(),
        ));
    }
    Ok(())
}
