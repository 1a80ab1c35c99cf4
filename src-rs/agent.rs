use std::sync::Arc;

use tracing::{error, info, warn};

use crate::config::AgentConfig;
use crate::llm::{CompletionRequest, Message, ProviderAdapter, ProviderError};
use crate::result::UpstreamOutcome;

/// Forwards a task to the upstream model and reduces whatever happens to an
/// [`UpstreamOutcome`]. Never fails.
pub struct TaskAgent {
    pub config: AgentConfig,
    api_key: Option<String>,
    adapter: Arc<dyn ProviderAdapter>,
}

impl TaskAgent {
    pub fn new(config: AgentConfig, api_key: Option<String>, adapter: Arc<dyn ProviderAdapter>) -> Self {
        Self {
            config,
            api_key,
            adapter,
        }
    }

    pub fn build_request(&self, task: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.config.model.clone(),
            messages: vec![Message::system(&self.config.system_prompt), Message::user(task)],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        }
    }

    pub async fn solve(&self, task: &str) -> UpstreamOutcome {
        info!(task = %task, "processing task");

        let api_key = match self.api_key.as_deref() {
            Some(key) => key,
            None => {
                error!("OPENAI_API_KEY environment variable not set");
                return UpstreamOutcome::Failure(ProviderError::MissingApiKey);
            }
        };

        let request = self.build_request(task);
        let outcome = UpstreamOutcome::from(self.adapter.send(api_key, &request).await);
        match &outcome {
            UpstreamOutcome::Success(text) => info!(output = %text, "agent output"),
            UpstreamOutcome::Failure(ProviderError::Timeout) => warn!("upstream request timed out"),
            UpstreamOutcome::Failure(err) => error!(error = %err, "upstream request failed"),
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct RecordingAdapter {
        calls: AtomicUsize,
        last: Mutex<Option<(String, CompletionRequest)>>,
        reply: Result<String, ProviderError>,
    }

    impl RecordingAdapter {
        fn new(reply: Result<String, ProviderError>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                last: Mutex::new(None),
                reply,
            })
        }
    }

    #[async_trait]
    impl ProviderAdapter for RecordingAdapter {
        async fn send(&self, api_key: &str, request: &CompletionRequest) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some((api_key.to_string(), request.clone()));
            self.reply.clone()
        }
    }

    #[tokio::test]
    async fn test_missing_key_skips_network() {
        let adapter = RecordingAdapter::new(Ok("unused".to_string()));
        let agent = TaskAgent::new(AgentConfig::default(), None, adapter.clone());

        let outcome = agent.solve("print hello").await;

        assert_eq!(outcome.text(), "Error: API key not configured");
        assert_eq!(adapter.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_forwards_task_with_fixed_parameters() {
        let adapter = RecordingAdapter::new(Ok("hello".to_string()));
        let agent = TaskAgent::new(AgentConfig::default(), Some("sk-test".to_string()), adapter.clone());

        let outcome = agent.solve("print hello").await;

        assert_eq!(outcome, UpstreamOutcome::Success("hello".to_string()));
        assert_eq!(adapter.calls.load(Ordering::SeqCst), 1);
        let (key, request) = adapter.last.lock().unwrap().clone().unwrap();
        assert_eq!(key, "sk-test");
        assert_eq!(request.model, "gpt-3.5-turbo");
        assert_eq!(request.max_tokens, 500);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[1], Message::user("print hello"));
    }

    #[tokio::test]
    async fn test_failures_become_text() {
        let cases = [
            (ProviderError::Status { code: 404, body: "gone".to_string() }, "API Error: 404"),
            (ProviderError::Timeout, "Error: Request timed out"),
            (ProviderError::Network("connection reset".to_string()), "Error: connection reset"),
        ];
        for (err, expected) in cases {
            let adapter = RecordingAdapter::new(Err(err));
            let agent = TaskAgent::new(AgentConfig::default(), Some("sk-test".to_string()), adapter);
            let outcome = agent.solve("anything").await;
            assert!(!outcome.is_success());
            assert_eq!(outcome.text(), expected);
        }
    }

    #[tokio::test]
    async fn test_empty_task_passes_through() {
        let adapter = RecordingAdapter::new(Ok(String::new()));
        let agent = TaskAgent::new(AgentConfig::default(), Some("sk-test".to_string()), adapter.clone());

        agent.solve("").await;

        let (_, request) = adapter.last.lock().unwrap().clone().unwrap();
        assert_eq!(request.messages[1].content, "");
    }
}
