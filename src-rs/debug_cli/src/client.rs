use std::time::Duration;

use reqwest::blocking::Client;

use crate::models::{HealthResponse, TaskResponse};

// The server waits up to 30s on the model, leave headroom on top of that.
const CLIENT_TIMEOUT: Duration = Duration::from_secs(45);

pub struct HTTPClient {
    pub base_url: String,
    client: Client,
}

impl HTTPClient {
    pub fn new(base_url: &str) -> Result<Self, String> {
        let client = Client::builder()
            .timeout(CLIENT_TIMEOUT)
            .build()
            .map_err(|err| format!("failed to build http client: {}", err))?;
        Ok(Self {
            base_url: base_url.to_string(),
            client,
        })
    }

    pub fn run_task(&self, task: &str) -> Result<TaskResponse, String> {
        let url = format!("{}/task", self.base_url.trim_end_matches('/'));
        let resp = self
            .client
            .get(url)
            .query(&[("q", task)])
            .send()
            .map_err(|err| err.to_string())?;

        if resp.status().is_success() {
            resp.json::<TaskResponse>().map_err(|err| err.to_string())
        } else {
            let status = resp.status();
            let body = resp.text().unwrap_or_default();
            Err(format!("http {}: {}", status.as_u16(), body))
        }
    }

    pub fn health(&self) -> Result<HealthResponse, String> {
        let url = format!("{}/", self.base_url.trim_end_matches('/'));
        let resp = self.client.get(url).send().map_err(|err| err.to_string())?;
        if resp.status().is_success() {
            resp.json::<HealthResponse>().map_err(|err| err.to_string())
        } else {
            let status = resp.status();
            let body = resp.text().unwrap_or_default();
            Err(format!("http {}: {}", status.as_u16(), body))
        }
    }
}
