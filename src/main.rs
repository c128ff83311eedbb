use bookhive::{config::Config, create_router, telemetry::init_tracing, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env()?;
    tracing::info!(
        api_url = %config.google_books_api_url,
        api_key_configured = config.google_books_api_key.is_some(),
        num_output = config.num_output,
        "Configuration loaded"
    );

    let state = AppState::from_config(&config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %config.bind_address(), "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
