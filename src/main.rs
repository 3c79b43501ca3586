use medquiz::{
    AiQuestionGenerator, OpenRouterClient, PollinationsClient, QuizConfig, QuizSession,
    TextGenerator, logger,
};
use std::io::{self, Write};
use std::sync::Arc;

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn print_question(number: u32, question: &medquiz::Question) {
    println!("\nQ{}: {}", number, question.text);
    for (i, option) in question.options.iter().enumerate() {
        println!("  {}. {}", i + 1, option);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init();

    let subject = read_line("Subject: ")?;
    let difficulty = {
        let input = read_line("Difficulty [Easy/Medium/Hard] (default Medium): ")?;
        if input.is_empty() {
            "Medium".to_string()
        } else {
            input
        }
    };
    let question_limit: u32 = read_line("Number of questions (0 = unlimited): ")?
        .parse()
        .unwrap_or(0);

    let text: Arc<dyn TextGenerator> = Arc::new(OpenRouterClient::new()?);
    let images = Arc::new(PollinationsClient::new()?);
    let questions = Arc::new(AiQuestionGenerator::new(text.clone()));

    let mut session = QuizSession::new(
        QuizConfig {
            difficulty,
            question_limit,
            time_limit_secs: 0,
        },
        text,
        images,
        questions,
    );

    loop {
        let question = match session.next_question(&subject).await {
            Ok(Some(question)) => question,
            Ok(None) => {
                println!("\nNo more questions.");
                break;
            }
            Err(e) => {
                eprintln!("Failed to get a question: {}", e);
                break;
            }
        };

        print_question(session.questions_answered + 1, &question);

        let answer = loop {
            let input = read_line("Your answer (number, or q to quit): ")?;
            if input.eq_ignore_ascii_case("q") {
                break None;
            }
            match input.parse::<usize>() {
                Ok(n) if n >= 1 && n <= question.options.len() => break Some(n - 1),
                _ => println!("Enter a number between 1 and {}.", question.options.len()),
            }
        };

        let Some(answer) = answer else { break };

        session.questions_answered += 1;
        if answer == question.correct_index {
            session.score += 1;
            println!("Correct!");
        } else {
            session.wrong_answers += 1;
            println!(
                "Incorrect. The answer was: {}",
                question.options[question.correct_index]
            );
        }

        println!("\nLoading explanation...");
        let explanation = session
            .explanation(&question.text, &question.options, question.correct_index)
            .await;
        println!("\n{}", explanation.text);
        if let Some(url) = &explanation.image_url {
            println!("\nDiagram: {}", url);
        }

        loop {
            let choice =
                read_line("\n[Enter] next question  [o] learning objectives  [d] ask a doubt  [q] quit: ")?;
            match choice.as_str() {
                "" => break,
                "o" => {
                    println!("\nLoading learning objectives...");
                    let objectives = session
                        .learning_objectives(
                            &question.text,
                            &question.options,
                            question.correct_index,
                        )
                        .await;
                    println!("\n{}", objectives.content);
                    if let Some(url) = &objectives.image_url {
                        println!("\nDiagram: {}", url);
                    }
                }
                "d" => {
                    let doubt = read_line("Your doubt: ")?;
                    if !doubt.is_empty() {
                        let answer = session.ask_doubt(&doubt, &question.text).await;
                        println!("\n{}", answer.text);
                        if let Some(url) = &answer.image_url {
                            println!("\nDiagram: {}", url);
                        }
                    }
                }
                "q" => {
                    let results = session.results();
                    println!(
                        "\nResults: {}/{} correct ({} wrong), {}%",
                        results.correct, results.total, results.wrong, results.percentage
                    );
                    return Ok(());
                }
                _ => {}
            }
        }
    }

    let results = session.results();
    println!(
        "\nResults: {}/{} correct ({} wrong), {}%",
        results.correct, results.total, results.wrong, results.percentage
    );

    Ok(())
}
