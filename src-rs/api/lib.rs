pub use crate::agent::TaskAgent;
pub use crate::config::{AgentConfig, ServerConfig};
pub use crate::result::UpstreamOutcome;

pub mod handlers;
pub mod server;

pub use handlers::{ApiError, AppState, TaskResponse};
pub use server::AgentServer;
