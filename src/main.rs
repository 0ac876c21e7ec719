use notebook_health_sidecar::{app_state::AppState, config::Config, server};
use tracing::debug;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cfg = Config::from_env()?;
    debug!(monitored_port = cfg.monitored_port, "monitored service port recorded");

    let listener = server::bind(cfg.listen_port).await?;
    println!("Health check server started at port {}", cfg.listen_port);

    let state = AppState::new(cfg);
    let server = tokio::spawn(server::serve(listener, state));
    println!("Health check server running in background");

    // Nothing else runs in this process; the retained handle is what keeps
    // it alive, and a hook for shutdown signaling later.
    server.await??;

    Ok(())
}
