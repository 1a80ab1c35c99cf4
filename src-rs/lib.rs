pub mod agent;
pub mod config;
pub mod helpers;
pub mod result;

#[path = "llm/lib.rs"]
pub mod llm;
#[path = "api/lib.rs"]
pub mod api;

pub use agent::TaskAgent;
pub use config::{AgentConfig, ServerConfig};
pub use helpers::setup_logging;
pub use result::UpstreamOutcome;
