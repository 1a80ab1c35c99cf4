use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq)]
pub struct CLIConfig {
    pub base_url: String,
    pub raw: bool,
}

#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TaskResponse {
    pub task: String,
    pub agent: String,
    pub output: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub message: String,
    pub status: String,
}
