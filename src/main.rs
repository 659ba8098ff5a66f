mod model;
mod server;

use tower_http::cors::CorsLayer;

use crate::server::{
    config::Config, error::AppError, gateway::PaymentGateway, service::token::TokenService,
    startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lawyer_point=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client();
    let gateway = PaymentGateway::new(
        http_client,
        config.payment_api_url.clone(),
        config.payment_secret_key.clone(),
    );
    let tokens = TokenService::new(&config.access_token_secret);

    tracing::info!("Starting server");

    let app = server::router::router()
        .with_state(AppState::new(db, tokens, gateway))
        // The single web client is served from another origin, so every route
        // is exposed cross-origin like the original deployment.
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Lawyer Point running on {}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
