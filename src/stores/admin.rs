use std::{future::Future, sync::Arc};

use tokio::sync::watch;

use crate::{
    client::ApiClient,
    dto::{
        admin::{DishForm, ImageUpload, RestaurantForm},
        orders::AdminOrderQuery,
    },
    error::AppResult,
    models::{Dish, Order, OrderStatus, Restaurant, User},
    services::{admin_service, catalog_service},
};

#[derive(Debug, Clone, PartialEq)]
pub struct PanelState<T> {
    pub items: Vec<T>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<T> Default for PanelState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
            error: None,
        }
    }
}

/// List-plus-mutation container shared by the admin panels.
///
/// Panels never patch their rows locally: after any mutation they refetch.
#[derive(Debug)]
struct Panel<T> {
    state: Arc<watch::Sender<PanelState<T>>>,
}

impl<T> Clone for Panel<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T: Clone> Panel<T> {
    fn new() -> Self {
        let (state, _) = watch::channel(PanelState::default());
        Self {
            state: Arc::new(state),
        }
    }

    fn snapshot(&self) -> PanelState<T> {
        self.state.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<PanelState<T>> {
        self.state.subscribe()
    }

    async fn load<F>(&self, what: &'static str, request: F) -> AppResult<Vec<T>>
    where
        F: Future<Output = AppResult<Vec<T>>>,
    {
        self.state.send_modify(|state| {
            state.is_loading = true;
            state.error = None;
        });
        match request.await {
            Ok(items) => {
                self.state.send_modify(|state| {
                    state.items = items.clone();
                    state.is_loading = false;
                });
                Ok(items)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load {what}");
                self.state.send_modify(|state| {
                    state.is_loading = false;
                    state.error = Some(err.message());
                });
                Err(err)
            }
        }
    }

    async fn mutate<R, F>(&self, action: &'static str, request: F) -> AppResult<R>
    where
        F: Future<Output = AppResult<R>>,
    {
        self.state.send_modify(|state| {
            state.is_loading = true;
            state.error = None;
        });
        match request.await {
            Ok(value) => Ok(value),
            Err(err) => {
                tracing::error!(error = %err, "failed to {action}");
                self.state.send_modify(|state| {
                    state.is_loading = false;
                    state.error = Some(err.message());
                });
                Err(err)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct RestaurantsPanel {
    api: ApiClient,
    panel: Panel<Restaurant>,
}

impl RestaurantsPanel {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            panel: Panel::new(),
        }
    }

    pub fn snapshot(&self) -> PanelState<Restaurant> {
        self.panel.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<PanelState<Restaurant>> {
        self.panel.subscribe()
    }

    pub async fn refresh(&self) -> AppResult<Vec<Restaurant>> {
        self.panel
            .load("restaurants", catalog_service::list_restaurants(&self.api))
            .await
    }

    pub async fn create(
        &self,
        form: &RestaurantForm,
        image: Option<ImageUpload>,
    ) -> AppResult<Restaurant> {
        let created = self
            .panel
            .mutate(
                "create restaurant",
                admin_service::create_restaurant(&self.api, form, image),
            )
            .await?;
        self.refresh().await?;
        Ok(created)
    }

    pub async fn update(
        &self,
        restaurant_id: i64,
        form: &RestaurantForm,
        image: Option<ImageUpload>,
    ) -> AppResult<Restaurant> {
        let updated = self
            .panel
            .mutate(
                "update restaurant",
                admin_service::update_restaurant(&self.api, restaurant_id, form, image),
            )
            .await?;
        self.refresh().await?;
        Ok(updated)
    }

    pub async fn delete(&self, restaurant_id: i64) -> AppResult<()> {
        self.panel
            .mutate(
                "delete restaurant",
                admin_service::delete_restaurant(&self.api, restaurant_id),
            )
            .await?;
        self.refresh().await?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct DishesPanel {
    api: ApiClient,
    restaurant_id: i64,
    panel: Panel<Dish>,
}

impl DishesPanel {
    pub fn new(api: ApiClient, restaurant_id: i64) -> Self {
        Self {
            api,
            restaurant_id,
            panel: Panel::new(),
        }
    }

    pub fn restaurant_id(&self) -> i64 {
        self.restaurant_id
    }

    pub fn snapshot(&self) -> PanelState<Dish> {
        self.panel.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<PanelState<Dish>> {
        self.panel.subscribe()
    }

    pub async fn refresh(&self) -> AppResult<Vec<Dish>> {
        self.panel
            .load(
                "dishes",
                catalog_service::list_dishes(&self.api, self.restaurant_id),
            )
            .await
    }

    pub async fn create(&self, form: &DishForm, image: Option<ImageUpload>) -> AppResult<Dish> {
        let created = self
            .panel
            .mutate(
                "create dish",
                admin_service::create_dish(&self.api, self.restaurant_id, form, image),
            )
            .await?;
        self.refresh().await?;
        Ok(created)
    }

    pub async fn update(
        &self,
        dish_id: i64,
        form: &DishForm,
        image: Option<ImageUpload>,
    ) -> AppResult<Dish> {
        let updated = self
            .panel
            .mutate(
                "update dish",
                admin_service::update_dish(&self.api, dish_id, form, image),
            )
            .await?;
        self.refresh().await?;
        Ok(updated)
    }

    pub async fn delete(&self, dish_id: i64) -> AppResult<()> {
        self.panel
            .mutate("delete dish", admin_service::delete_dish(&self.api, dish_id))
            .await?;
        self.refresh().await?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct OrdersPanel {
    api: ApiClient,
    filter: Arc<watch::Sender<AdminOrderQuery>>,
    panel: Panel<Order>,
}

impl OrdersPanel {
    pub fn new(api: ApiClient) -> Self {
        let (filter, _) = watch::channel(AdminOrderQuery::default());
        Self {
            api,
            filter: Arc::new(filter),
            panel: Panel::new(),
        }
    }

    pub fn snapshot(&self) -> PanelState<Order> {
        self.panel.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<PanelState<Order>> {
        self.panel.subscribe()
    }

    pub fn filter(&self) -> AdminOrderQuery {
        self.filter.borrow().clone()
    }

    pub async fn set_filter(&self, filter: AdminOrderQuery) -> AppResult<Vec<Order>> {
        self.filter.send_replace(filter);
        self.refresh().await
    }

    pub async fn refresh(&self) -> AppResult<Vec<Order>> {
        let filter = self.filter();
        self.panel
            .load("orders", admin_service::list_orders(&self.api, &filter))
            .await
    }

    /// Any status can be set from any other.
    pub async fn set_status(&self, order_id: i64, status: OrderStatus) -> AppResult<Order> {
        let order = self
            .panel
            .mutate(
                "update order status",
                admin_service::update_order_status(&self.api, order_id, status),
            )
            .await?;
        self.refresh().await?;
        Ok(order)
    }
}

#[derive(Debug, Clone)]
pub struct UsersPanel {
    api: ApiClient,
    current: User,
    panel: Panel<User>,
}

impl UsersPanel {
    pub fn new(api: ApiClient, current: User) -> Self {
        Self {
            api,
            current,
            panel: Panel::new(),
        }
    }

    pub fn snapshot(&self) -> PanelState<User> {
        self.panel.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<PanelState<User>> {
        self.panel.subscribe()
    }

    /// Display gate only: the signed-in admin cannot delete their own row.
    /// `delete` itself does not re-check this.
    pub fn can_delete(&self, user: &User) -> bool {
        !self.current.is_same_account(user)
    }

    pub async fn refresh(&self) -> AppResult<Vec<User>> {
        self.panel
            .load("users", admin_service::list_users(&self.api))
            .await
    }

    pub async fn delete(&self, user_id: i64) -> AppResult<()> {
        self.panel
            .mutate("delete user", admin_service::delete_user(&self.api, user_id))
            .await?;
        self.refresh().await?;
        Ok(())
    }
}
