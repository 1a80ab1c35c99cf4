pub mod openai_adapter;
pub mod types;

pub use openai_adapter::{OpenAIAdapter, OpenAIConfig};
pub use types::{
    Choice, ChoiceMessage, CompletionRequest, CompletionResponse, Message, ProviderAdapter, ProviderError,
};
