use std::env;

use crate::models::CLIConfig;

const DEFAULT_URL: &str = "http://localhost:8000";

pub fn parse_config() -> CLIConfig {
    let base_url = env::var("CODING_AGENT_URL")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_URL.to_string());
    parse_args(env::args().skip(1), base_url)
}

pub fn parse_args<I>(args: I, base_url: String) -> CLIConfig
where
    I: IntoIterator<Item = String>,
{
    let mut cfg = CLIConfig { base_url, raw: false };
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--base" => {
                if let Some(value) = args.next() {
                    cfg.base_url = value;
                }
            }
            "--raw" => cfg.raw = true,
            _ => {}
        }
    }
    cfg
}
