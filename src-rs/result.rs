use crate::llm::ProviderError;

/// Reduced result of one upstream call.
#[derive(Clone, Debug, PartialEq)]
pub enum UpstreamOutcome {
    Success(String),
    Failure(ProviderError),
}

impl UpstreamOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, UpstreamOutcome::Success(_))
    }

    /// Text shown to the caller. Failures render as their diagnostic message.
    pub fn text(&self) -> String {
        match self {
            UpstreamOutcome::Success(text) => text.clone(),
            UpstreamOutcome::Failure(err) => err.to_string(),
        }
    }
}

impl From<Result<String, ProviderError>> for UpstreamOutcome {
    fn from(result: Result<String, ProviderError>) -> Self {
        match result {
            Ok(text) => UpstreamOutcome::Success(text),
            Err(err) => UpstreamOutcome::Failure(err),
        }
    }
}
