use stockdesk_server::{api::agent_router, build_agent_state, config::AgentConfig, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AgentConfig::from_env()?;
    init_tracing();
    let state = build_agent_state(&config)?;

    let router = agent_router(state, &config.server);
    tracing::info!("Agent listening on {}", config.server.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.server.listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
