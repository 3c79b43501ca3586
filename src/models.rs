use serde::{Deserialize, Serialize};

/// A multiple-choice question produced by a question source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

/// Point-wise explanation for an answered question, with an optional
/// supporting diagram URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub text: String,
    pub image_url: Option<String>,
}

/// Learning objectives for a question. `content` is HTML-formatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningObjectives {
    pub content: String,
    pub image_url: Option<String>,
}

/// Answer to a user's follow-up doubt about a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoubtAnswer {
    pub text: String,
    pub image_url: Option<String>,
}

/// End-of-session summary derived from the session counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResults {
    pub total: u32,
    pub correct: u32,
    pub wrong: u32,
    pub percentage: u32,
}
