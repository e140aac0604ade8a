use anyhow::Context;
use stellar_burgers::client::{AuthResponse, CreateOrderRequest, CreateOrderResponse, Credentials, OrdersResponse};
use stellar_burgers::{ClientConfig, StellarBurgersClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env()?;
    tracing::info!("Running smoke check against {}", config.base_url);

    let client = StellarBurgersClient::new(&config)?;

    if let Err(e) = run_smoke_check(&client).await {
        tracing::error!("Smoke check failed: {:#}", e);
        tracing::error!("Please verify:");
        tracing::error!("  - STELLAR_BURGERS_BASE_URL is correct: {}", config.base_url);
        tracing::error!("  - The service is running and accessible");
        std::process::exit(1);
    }

    tracing::info!("Smoke check passed");
    Ok(())
}

/// Registers a throwaway account, orders with it and deletes it again.
async fn run_smoke_check(client: &StellarBurgersClient) -> anyhow::Result<()> {
    let ingredients = client
        .ingredients()
        .get_ingredients()
        .await
        .context("fetching ingredients")?;
    tracing::info!("Catalogue lists {} ingredients", ingredients.len());

    let chosen: Vec<String> = ingredients.iter().take(2).map(|i| i.id.clone()).collect();
    if chosen.is_empty() {
        anyhow::bail!("Ingredient catalogue is empty");
    }

    let credentials = Credentials::unique();
    let auth: AuthResponse = client
        .users()
        .register(&credentials)
        .await?
        .error_for_status()
        .context("registering smoke account")?
        .json()?;
    tracing::info!("Registered {}", credentials.email.as_deref().unwrap_or_default());

    // Always try to remove the account, even when ordering failed.
    let outcome = place_and_list_order(client, &auth.access_token, chosen).await;

    let deleted = client.users().delete(&auth.access_token).await?;
    if deleted.status_code() != 202 {
        tracing::warn!("Deleting smoke account answered {}", deleted.status());
    }

    outcome
}

async fn place_and_list_order(
    client: &StellarBurgersClient,
    access_token: &str,
    ingredients: Vec<String>,
) -> anyhow::Result<()> {
    let created: CreateOrderResponse = client
        .orders()
        .create_order_authorized(access_token, &CreateOrderRequest::new(ingredients))
        .await?
        .error_for_status()
        .context("creating order")?
        .json()?;
    tracing::info!("Placed order #{}", created.order.number);

    let orders: OrdersResponse = client
        .orders()
        .get_user_orders(access_token)
        .await?
        .error_for_status()
        .context("listing orders")?
        .json()?;
    if orders.orders.is_empty() {
        anyhow::bail!("Order history is empty right after placing order #{}", created.order.number);
    }
    tracing::info!("Order history holds {} orders", orders.orders.len());

    Ok(())
}
