use crate::ai::prompts::{doubt_prompt, explanation_prompt, learning_objectives_prompt};
use crate::ai::{AiError, ImageGenerator, QuestionSource, TextGenerator, split_image_marker};
use crate::logger;
use crate::models::{DoubtAnswer, Explanation, LearningObjectives, Question, QuizResults};
use std::sync::Arc;

pub const EXPLANATION_FALLBACK: &str = "Failed to load explanation.";
pub const OBJECTIVES_FALLBACK: &str = "<p>Failed to load learning objectives.</p>";
pub const DOUBT_FALLBACK: &str = "Failed to get answer. Please try again.";

/// Session configuration fixed at construction. `time_limit_secs` is
/// reserved; nothing in this crate enforces it.
#[derive(Debug, Clone, Default)]
pub struct QuizConfig {
    pub difficulty: String,
    pub question_limit: u32,
    pub time_limit_secs: u32,
}

/// One quiz session: counters plus the AI collaborators.
///
/// The counters are public on purpose. The caller owns scoring and updates
/// `score`, `wrong_answers`, and `questions_answered` directly after each
/// answer; the session only reads them back in `next_question` and
/// `results`.
pub struct QuizSession {
    pub score: u32,
    pub wrong_answers: u32,
    pub questions_answered: u32,
    pub question_limit: u32,
    pub time_limit_secs: u32,
    pub difficulty: String,
    text: Arc<dyn TextGenerator>,
    images: Arc<dyn ImageGenerator>,
    questions: Arc<dyn QuestionSource>,
}

impl QuizSession {
    pub fn new(
        config: QuizConfig,
        text: Arc<dyn TextGenerator>,
        images: Arc<dyn ImageGenerator>,
        questions: Arc<dyn QuestionSource>,
    ) -> Self {
        Self {
            score: 0,
            wrong_answers: 0,
            questions_answered: 0,
            question_limit: config.question_limit,
            time_limit_secs: config.time_limit_secs,
            difficulty: config.difficulty,
            text,
            images,
            questions,
        }
    }

    /// Next question for `subject`, or `None` once the configured limit is
    /// reached (0 means unlimited). Errors from the question source are
    /// passed through untouched.
    pub async fn next_question(&self, subject: &str) -> Result<Option<Question>, AiError> {
        if self.question_limit > 0 && self.questions_answered >= self.question_limit {
            logger::log(&format!(
                "Question limit reached ({}/{})",
                self.questions_answered, self.question_limit
            ));
            return Ok(None);
        }

        self.questions.next_question(subject, &self.difficulty).await
    }

    /// Explanation for an answered question. Never fails; any error in
    /// generation or image lookup collapses to the fixed fallback.
    ///
    /// Panics if `correct_index` is not a valid index into `options`.
    pub async fn explanation(
        &self,
        question: &str,
        options: &[String],
        correct_index: usize,
    ) -> Explanation {
        let prompt = explanation_prompt(&self.difficulty, question, options, correct_index);

        match self.generate_with_image(&prompt).await {
            Ok((text, image_url)) => Explanation { text, image_url },
            Err(e) => {
                logger::log(&format!("Explanation failed: {}", e));
                Explanation {
                    text: EXPLANATION_FALLBACK.to_string(),
                    image_url: None,
                }
            }
        }
    }

    /// Learning objectives for an answered question, HTML-formatted. Same
    /// fallback policy as `explanation`.
    ///
    /// Panics if `correct_index` is not a valid index into `options`.
    pub async fn learning_objectives(
        &self,
        question: &str,
        options: &[String],
        correct_index: usize,
    ) -> LearningObjectives {
        let prompt = learning_objectives_prompt(&self.difficulty, question, options, correct_index);

        match self.generate_with_image(&prompt).await {
            Ok((content, image_url)) => LearningObjectives { content, image_url },
            Err(e) => {
                logger::log(&format!("Learning objectives failed: {}", e));
                LearningObjectives {
                    content: OBJECTIVES_FALLBACK.to_string(),
                    image_url: None,
                }
            }
        }
    }

    /// Answer a free-text doubt about a question. Same fallback policy as
    /// `explanation`.
    pub async fn ask_doubt(&self, doubt: &str, question: &str) -> DoubtAnswer {
        let prompt = doubt_prompt(&self.difficulty, question, doubt);

        match self.generate_with_image(&prompt).await {
            Ok((text, image_url)) => DoubtAnswer { text, image_url },
            Err(e) => {
                logger::log(&format!("Doubt answer failed: {}", e));
                DoubtAnswer {
                    text: DOUBT_FALLBACK.to_string(),
                    image_url: None,
                }
            }
        }
    }

    /// Summary of the session so far. Pure; reads the counters only.
    pub fn results(&self) -> QuizResults {
        let percentage = if self.questions_answered > 0 {
            ((self.score as f64 / self.questions_answered as f64) * 100.0).round() as u32
        } else {
            0
        };

        QuizResults {
            total: self.questions_answered,
            correct: self.score,
            wrong: self.wrong_answers,
            percentage,
        }
    }

    // Shared body of the three content operations: one text completion,
    // then an image lookup only when the response carried a description.
    // Both calls sit inside the same failure boundary.
    async fn generate_with_image(
        &self,
        prompt: &str,
    ) -> Result<(String, Option<String>), AiError> {
        let response = self.text.generate(prompt).await?;
        let (body, description) = split_image_marker(&response);

        let image_url = match description {
            Some(description) => self.images.fetch_image(&description).await?,
            None => None,
        };

        Ok((body, image_url))
    }
}
