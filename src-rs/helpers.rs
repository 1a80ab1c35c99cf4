use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::agent::TaskAgent;
use crate::config::{AgentConfig, ServerConfig};
use crate::llm::{OpenAIAdapter, ProviderError};

/// Installs the global tracing subscriber. `RUST_LOG` overrides the default
/// `info` level. Safe to call more than once.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

pub fn build_agent(cfg: &ServerConfig) -> Result<TaskAgent, ProviderError> {
    let agent_cfg = AgentConfig::default();
    let adapter = OpenAIAdapter::new(agent_cfg.openai())?;
    Ok(TaskAgent::new(agent_cfg, cfg.api_key.clone(), Arc::new(adapter)))
}
