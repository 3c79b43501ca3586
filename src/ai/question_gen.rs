use crate::ai::{AiError, QuestionSource, TextGenerator};
use crate::logger;
use crate::models::Question;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

fn clean_json_response(response: &str) -> String {
    let mut cleaned = response.trim().to_string();

    if cleaned.starts_with("```") {
        let lines: Vec<&str> = cleaned.lines().collect();
        if lines.len() > 2 {
            cleaned = lines[1..lines.len() - 1].join("\n");
        }
    }

    if let Some(start) = cleaned.find('{')
        && let Some(end) = cleaned.rfind('}')
    {
        cleaned = cleaned[start..=end].to_string();
    }

    cleaned.trim().to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct QuestionRaw {
    question: String,
    options: Vec<String>,
    correct_index: usize,
}

pub fn parse_question(response: &str) -> Result<Question, String> {
    let cleaned = clean_json_response(response);
    let raw: QuestionRaw = serde_json::from_str(&cleaned).map_err(|e| {
        format!(
            "Failed to parse question: {}\nRaw: {}\nCleaned: {}",
            e, response, cleaned
        )
    })?;

    if raw.options.len() < 2 {
        return Err(format!(
            "Question has {} options, need at least 2. Raw: {}",
            raw.options.len(),
            response
        ));
    }

    if raw.correct_index >= raw.options.len() {
        return Err(format!(
            "Correct index {} out of range for {} options. Raw: {}",
            raw.correct_index,
            raw.options.len(),
            response
        ));
    }

    Ok(Question {
        text: raw.question,
        options: raw.options,
        correct_index: raw.correct_index,
    })
}

/// Question source that asks the text generator for a fresh multiple-choice
/// question as strict JSON.
pub struct AiQuestionGenerator {
    generator: Arc<dyn TextGenerator>,
}

impl AiQuestionGenerator {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    fn prompt(subject: &str, difficulty: &str) -> String {
        format!(
            r#"Generate one {} level multiple-choice medical question on the subject "{}" and respond ONLY with valid JSON.

IMPORTANT:

- Respond ONLY with this exact JSON structure (no markdown, no extra text):
{{
    "question": "the question text",
    "options": ["option 1", "option 2", "option 3", "option 4"],
    "correct_index": zero-based index of the correct option
}}
- Exactly one option must be correct.
"#,
            difficulty.to_lowercase(),
            subject
        )
    }
}

#[async_trait]
impl QuestionSource for AiQuestionGenerator {
    async fn next_question(
        &self,
        subject: &str,
        difficulty: &str,
    ) -> Result<Option<Question>, AiError> {
        logger::log(&format!(
            "Requesting question: subject={}, difficulty={}",
            subject, difficulty
        ));

        let response = self
            .generator
            .generate(&Self::prompt(subject, difficulty))
            .await?;
        logger::log(&format!("Raw question response: {}", response));

        let question = parse_question(&response)?;
        Ok(Some(question))
    }
}
