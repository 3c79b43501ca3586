pub mod client;
pub mod image;
pub mod prompts;
pub mod question_gen;
pub mod response;

pub use client::{DEFAULT_MODEL, ModelConfig, OpenRouterClient};
pub use image::PollinationsClient;
pub use question_gen::AiQuestionGenerator;
pub use response::split_image_marker;

use crate::models::Question;
use async_trait::async_trait;

pub type AiError = Box<dyn std::error::Error + Send + Sync>;

/// Text completion from a prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AiError>;
}

/// Image lookup from a textual description. `Ok(None)` means the service
/// had nothing for this description, as opposed to failing.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn fetch_image(&self, description: &str) -> Result<Option<String>, AiError>;
}

/// Supplies the next question for a subject at a difficulty, or `None`
/// when exhausted.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn next_question(
        &self,
        subject: &str,
        difficulty: &str,
    ) -> Result<Option<Question>, AiError>;
}
