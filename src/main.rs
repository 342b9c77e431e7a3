use axum::Router;
use card_data_service::{
    card_data_routes, common_routes_with_ready, ensure_card_table, ensure_database_exists,
    AppState, CardDataService, PgCardStore, Settings,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("card_data_service=info")),
        )
        .init();

    let settings = Settings::from_env();
    ensure_database_exists(&settings.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&settings.database_url)
        .await?;

    ensure_card_table(&pool, &settings.schema).await?;

    let store = PgCardStore::new(pool.clone(), settings.schema.clone());
    let state = AppState {
        service: CardDataService::new(Arc::new(store)),
    };

    let app = Router::new()
        .merge(common_routes_with_ready(pool))
        .nest("/api", card_data_routes(state))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
