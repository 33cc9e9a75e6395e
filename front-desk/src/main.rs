use front_desk::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. .env and logging
    setup_environment()?;

    print_banner();

    tracing::info!("Front desk starting...");

    // 2. Configuration
    let config = Config::from_env();

    // 3. Ledger: open storage, restore, seed rooms
    let state = ServerState::initialize(&config).inspect_err(|e| {
        tracing::error!(error = %e, "Failed to initialize server state");
    })?;

    // 4. Serve until Ctrl-C
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
