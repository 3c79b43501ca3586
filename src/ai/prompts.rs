use crate::ai::response::IMAGE_MARKER;

/// Prompt for a point-wise explanation of why the correct option is right
/// and each other option is wrong.
///
/// Panics if `correct_index` is not a valid index into `options`.
pub fn explanation_prompt(
    difficulty: &str,
    question: &str,
    options: &[String],
    correct_index: usize,
) -> String {
    assert!(
        correct_index < options.len(),
        "correct_index {} out of range for {} options",
        correct_index,
        options.len()
    );

    let numbered = options
        .iter()
        .enumerate()
        .map(|(i, opt)| format!("{}. {}", i + 1, opt))
        .collect::<Vec<_>>()
        .join(", ");

    let wrong_sections = options
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != correct_index)
        .map(|(_, opt)| {
            format!(
                "{}:\n• Point 1 why it's wrong\n• Point 2 why it's wrong",
                opt
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        r#"For this {} level medical question and its options:
Question: "{}"
Options: {}
Correct Answer: {}

Please provide a point-wise explanation in this exact format:
CORRECT ANSWER ({}):
• Point 1 about why it's correct
• Point 2 about why it's correct

WHY OTHER OPTIONS ARE INCORRECT:
{}

Also provide a brief description of a medical diagram or image that would help explain this concept.
{}
"#,
        difficulty.to_lowercase(),
        question,
        numbered,
        options[correct_index],
        options[correct_index],
        wrong_sections,
        IMAGE_MARKER
    )
}

/// Prompt for HTML-formatted learning objectives around the question's
/// correct answer.
///
/// Panics if `correct_index` is not a valid index into `options`.
pub fn learning_objectives_prompt(
    difficulty: &str,
    question: &str,
    options: &[String],
    correct_index: usize,
) -> String {
    assert!(
        correct_index < options.len(),
        "correct_index {} out of range for {} options",
        correct_index,
        options.len()
    );

    format!(
        r#"For this {} level medical question:
Question: "{}"
Correct Answer: {}

Create concise learning objectives that include:
1. Key points to remember (2-3 bullet points)
2. Any relevant formulas or equations
3. A small table if applicable
4. A brief flowchart or mindmap description if relevant
5. One flashcard-style quick fact

Format the response in HTML with appropriate tags (<ul>, <table>, etc.).
Also suggest a medical diagram or illustration that would help reinforce these concepts.
{}
"#,
        difficulty.to_lowercase(),
        question,
        options[correct_index],
        IMAGE_MARKER
    )
}

/// Prompt answering a student's free-text doubt in the context of a question.
pub fn doubt_prompt(difficulty: &str, question: &str, doubt: &str) -> String {
    format!(
        r#"Regarding this {} level medical question:
"{}"

User's doubt: "{}"

Please provide a clear, detailed explanation addressing this specific doubt in the context of the question.
Focus on medical accuracy and explain in a way that's helpful for medical students.

Also suggest if a medical diagram or image would be helpful, and if so, describe what it should show.
{}
"#,
        difficulty.to_lowercase(),
        question,
        doubt,
        IMAGE_MARKER
    )
}
