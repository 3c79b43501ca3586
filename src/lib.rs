pub mod ai;
pub mod logger;
pub mod models;
pub mod session;

// Re-exports for convenience
pub use ai::{
    AiError, AiQuestionGenerator, DEFAULT_MODEL, ImageGenerator, ModelConfig, OpenRouterClient,
    PollinationsClient, QuestionSource, TextGenerator, split_image_marker,
};
pub use models::{DoubtAnswer, Explanation, LearningObjectives, Question, QuizResults};
pub use session::{QuizConfig, QuizSession};
