use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use food_storefront::{
    config::AppConfig,
    dto::{auth::LoginRequest, orders::AdminOrderQuery},
    models::OrderStatus,
    services::{catalog_service, order_service},
    state::AppState,
};

#[derive(Parser)]
#[command(name = "food-storefront", about = "Food delivery storefront client")]
struct Args {
    #[arg(long, help = "Backend base URL (overrides STOREFRONT_API_URL)")]
    api_url: Option<String>,

    #[arg(long, env = "STOREFRONT_USER", help = "Login name")]
    user: Option<String>,

    #[arg(long, env = "STOREFRONT_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the signed-in user
    Whoami,
    Restaurants {
        #[arg(long)]
        search: Option<String>,
    },
    Dishes {
        restaurant: i64,
        #[arg(long)]
        search: Option<String>,
    },
    /// Search dishes across every restaurant
    Search { dish: String },
    Cart,
    Add {
        dish: i64,
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
    Remove {
        item: i64,
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
    Clear,
    Checkout,
    Orders {
        #[arg(long)]
        status: Option<OrderStatus>,
    },
    Cancel { order: i64 },
    AdminOrders {
        #[arg(long)]
        status: Option<OrderStatus>,
        #[arg(long)]
        user: Option<i64>,
    },
    SetStatus { order: i64, status: OrderStatus },
    AdminUsers,
}

impl Command {
    fn is_public(&self) -> bool {
        matches!(
            self,
            Command::Restaurants { .. } | Command::Dishes { .. } | Command::Search { .. }
        )
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,food_storefront=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let mut config = AppConfig::from_env()?;
    if let Some(api_url) = &args.api_url {
        config.set_api_url(api_url)?;
    }
    tracing::info!(api_url = %config.api_url, "using backend");

    let state = AppState::new(config)?;
    if !args.command.is_public() {
        sign_in(&state, &args).await?;
    }

    run(&state, args.command).await
}

/// Cookies live only as long as the process, so every command logs in first.
async fn sign_in(state: &AppState, args: &Args) -> anyhow::Result<()> {
    let (Some(name), Some(password)) = (&args.user, &args.password) else {
        anyhow::bail!("this command needs --user and --password (or STOREFRONT_USER/STOREFRONT_PASSWORD)");
    };
    state
        .login(&LoginRequest {
            name: name.clone(),
            password: password.clone(),
        })
        .await
        .with_context(|| format!("login as {name} failed"))?;
    Ok(())
}

async fn run(state: &AppState, command: Command) -> anyhow::Result<()> {
    let api = state.api();
    match command {
        Command::Whoami => print_json(&state.auth.user()),
        Command::Restaurants { search } => {
            let restaurants = match search {
                Some(name) => catalog_service::search_restaurants(api, &name).await?,
                None => catalog_service::list_restaurants(api).await?,
            };
            print_json(&restaurants)
        }
        Command::Dishes { restaurant, search } => {
            let dishes = match search {
                Some(name) => {
                    catalog_service::search_dishes_in_restaurant(api, restaurant, &name).await?
                }
                None => catalog_service::list_dishes(api, restaurant).await?,
            };
            print_json(&dishes)
        }
        Command::Search { dish } => print_json(&catalog_service::search_dishes(api, &dish).await?),
        Command::Cart => print_json(&state.cart.fetch_cart().await?),
        Command::Add { dish, quantity } => {
            print_json(&state.cart.add_to_cart(dish, quantity).await?)
        }
        Command::Remove { item, quantity } => {
            print_json(&state.cart.remove_item(item, quantity).await?)
        }
        Command::Clear => {
            state.cart.clear_cart().await?;
            print_json(&state.cart.cart())
        }
        Command::Checkout => print_json(&state.checkout().place_order().await?),
        Command::Orders { status } => {
            let orders = match status {
                Some(status) => order_service::orders_by_status(api, status).await?,
                None => order_service::list_orders(api).await?,
            };
            print_json(&orders)
        }
        Command::Cancel { order } => print_json(&order_service::cancel_order(api, order).await?),
        Command::AdminOrders { status, user } => {
            let panel = state.orders_panel()?;
            let orders = panel
                .set_filter(AdminOrderQuery {
                    status,
                    user_id: user,
                })
                .await?;
            print_json(&orders)
        }
        Command::SetStatus { order, status } => {
            print_json(&state.orders_panel()?.set_status(order, status).await?)
        }
        Command::AdminUsers => print_json(&state.users_panel()?.refresh().await?),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
