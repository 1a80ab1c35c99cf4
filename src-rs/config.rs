use std::env;
use std::time::Duration;

use crate::llm::openai_adapter::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use crate::llm::OpenAIConfig;

pub const DEFAULT_PORT: u16 = 8000;
pub const AGENT_ID: &str = "openai-gpt-3.5-turbo";
pub const CONTACT_EMAIL: &str = "23f1002487@ds.study.iitm.ac.in";

pub const SYSTEM_PROMPT: &str = "You are a coding assistant that can write and execute code to solve programming tasks.
When given a task, analyze it carefully, write the necessary code, execute it, and provide the final output/result.
Return only the final result/answer that the task is asking for, not the code itself.";

/// Fixed parameters of the upstream call. None of these come from the
/// environment.
#[derive(Clone, Debug)]
pub struct AgentConfig {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub system_prompt: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: 500,
            temperature: 0.1,
            system_prompt: SYSTEM_PROMPT.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AgentConfig {
    pub fn openai(&self) -> OpenAIConfig {
        OpenAIConfig {
            endpoint: self.endpoint.clone(),
            timeout: self.timeout,
        }
    }
}

/// Process-wide settings, read once at startup and shared read-only.
#[derive(Clone, Debug, Default)]
pub struct ServerConfig {
    pub api_key: Option<String>,
    pub port: u16,
    /// Map upstream failures to 5xx statuses instead of embedding them in a
    /// 200 envelope.
    pub strict_status: bool,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY").filter(|key| !key.is_empty());
        let port = lookup("PORT")
            .and_then(|raw| raw.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let strict_status = lookup("AGENT_STRICT_STATUS")
            .and_then(|raw| parse_flag(&raw))
            .unwrap_or(false);
        Self {
            api_key,
            port,
            strict_status,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Some(true),
        "off" | "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
