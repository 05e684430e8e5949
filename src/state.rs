use crate::{
    checkout::CheckoutFlow,
    client::ApiClient,
    config::AppConfig,
    dto::auth::{LoginRequest, RegisterRequest},
    error::AppResult,
    guard,
    models::User,
    search::SearchDebouncer,
    stores::{
        admin::{DishesPanel, OrdersPanel, RestaurantsPanel, UsersPanel},
        auth::AuthStore,
        cart::CartStore,
    },
};

/// One client session: a shared cookie jar plus the stores riding on it.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub api: ApiClient,
    pub auth: AuthStore,
    pub cart: CartStore,
}

impl AppState {
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let api = ApiClient::new(&config)?;
        Ok(Self {
            auth: AuthStore::new(api.clone()),
            cart: CartStore::new(api.clone()),
            api,
            config,
        })
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Restores an existing session, if the cookie jar has one.
    pub async fn bootstrap(&self) {
        self.auth.check_auth().await;
        if self.auth.is_authenticated() {
            self.load_cart().await;
        }
    }

    pub async fn login(&self, credentials: &LoginRequest) -> AppResult<User> {
        let user = self.auth.login(credentials).await?;
        self.load_cart().await;
        Ok(user)
    }

    pub async fn register(&self, data: &RegisterRequest) -> AppResult<User> {
        let user = self.auth.register(data).await?;
        self.load_cart().await;
        Ok(user)
    }

    pub async fn logout(&self) {
        self.auth.logout().await;
        self.cart.reset();
    }

    pub fn checkout(&self) -> CheckoutFlow {
        CheckoutFlow::new(self.api.clone(), self.cart.clone())
    }

    pub fn search(&self) -> (SearchDebouncer, tokio::sync::mpsc::UnboundedReceiver<String>) {
        SearchDebouncer::spawn(self.config.search_debounce)
    }

    pub fn restaurants_panel(&self) -> AppResult<RestaurantsPanel> {
        guard::ensure_admin(&self.auth.snapshot())?;
        Ok(RestaurantsPanel::new(self.api.clone()))
    }

    pub fn dishes_panel(&self, restaurant_id: i64) -> AppResult<DishesPanel> {
        guard::ensure_admin(&self.auth.snapshot())?;
        Ok(DishesPanel::new(self.api.clone(), restaurant_id))
    }

    pub fn orders_panel(&self) -> AppResult<OrdersPanel> {
        guard::ensure_admin(&self.auth.snapshot())?;
        Ok(OrdersPanel::new(self.api.clone()))
    }

    pub fn users_panel(&self) -> AppResult<UsersPanel> {
        let state = self.auth.snapshot();
        let current = guard::ensure_admin(&state)?.clone();
        Ok(UsersPanel::new(self.api.clone(), current))
    }

    async fn load_cart(&self) {
        if let Err(err) = self.cart.fetch_cart().await {
            tracing::warn!(error = %err, "could not load cart for session");
        }
    }
}
