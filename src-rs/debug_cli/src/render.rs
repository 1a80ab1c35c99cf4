use std::io::{self, Write};

use crate::models::{CLIConfig, ChatMessage, HealthResponse, TaskResponse};

pub fn banner(cfg: &CLIConfig) {
    println!("Coding Agent Debug CLI");
    println!("API: {}", cfg.base_url);
    println!("Type a task, or /help for commands.");
}

pub fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

pub fn help() {
    println!("Commands:");
    println!("  /help                 Show commands");
    println!("  /exit | /quit         Exit");
    println!("  /health               Check the server root endpoint");
    println!("  /raw [on|off]         Print the full response envelope");
    println!("  /history              Show session history");
    println!("  /reset                Clear session history");
    println!("  /config               Show current config");
    println!("  /base <url>           Update base URL");
}

pub fn response(resp: &TaskResponse, raw: bool) {
    if raw {
        match serde_json::to_string_pretty(resp) {
            Ok(text) => println!("{}", text),
            Err(err) => error(&err.to_string()),
        }
        return;
    }
    println!("{}> {}", resp.agent, resp.output);
}

pub fn health(resp: &HealthResponse) {
    println!("[{}] {}", resp.status, resp.message);
}

pub fn config(cfg: &CLIConfig) {
    println!("config:");
    println!("  base: {}", cfg.base_url);
    println!("  raw: {}", cfg.raw);
}

pub fn history(items: &[ChatMessage]) {
    if items.is_empty() {
        println!("no history");
        return;
    }
    for msg in items {
        println!("{}> {}", msg.role, msg.content);
    }
}

pub fn info(msg: &str) {
    println!("{}", msg);
}

pub fn error(msg: &str) {
    eprintln!("error: {}", msg);
}
