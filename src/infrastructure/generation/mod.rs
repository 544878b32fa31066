//! Generation backends - HTTP client and OpenAI-compatible provider

mod http_client;
mod openai;

pub use http_client::{HttpClient, HttpClientTrait};
pub use openai::OpenAiGenerator;
