use stockdesk_server::{api::quote_router, build_state, config::QuoteConfig, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = QuoteConfig::from_env()?;
    init_tracing();
    let state = build_state(&config);

    let router = quote_router(state, &config.server);
    tracing::info!("Listening on {}", config.server.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.server.listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
