use coding_agent_rs::api::{AgentServer, AppState};
use coding_agent_rs::config::ServerConfig;
use coding_agent_rs::helpers::{build_agent, setup_logging};
use tracing::{error, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();

    let config = ServerConfig::from_env();
    if config.api_key.is_none() {
        warn!("OPENAI_API_KEY is not set, every task will report a configuration error");
    }

    let agent = build_agent(&config)?;
    let server = AgentServer::new(config.port, AppState::new(agent, config));
    if let Err(err) = server.start().await {
        error!(error = %err, "server error");
        return Err(err);
    }
    Ok(())
}
