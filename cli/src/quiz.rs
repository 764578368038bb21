//! Interactive multiple-choice quiz on a terminal.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use pdfstudy::{Grade, McqItem, Question};

/// Final tally of a quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub correct: usize,
    pub answered: usize,
    pub total: usize,
}

/// Ask every question in turn, grading each answer as it comes.
///
/// Inline error items are shown and skipped. End of input stops the quiz
/// early; the score covers what was answered.
pub fn run_quiz<R: BufRead, W: Write>(
    items: &[McqItem],
    input: &mut R,
    out: &mut W,
) -> io::Result<Score> {
    let mut score = Score {
        total: items.iter().filter(|i| !i.is_error()).count(),
        ..Score::default()
    };

    for (i, item) in items.iter().enumerate() {
        let question = match item {
            McqItem::Error(e) => {
                writeln!(out, "{} {}\n", "Error:".red(), e.error)?;
                continue;
            }
            McqItem::Question(q) => q,
        };

        print_question(out, i + 1, question)?;

        let Some(choice) = read_choice(question, input, out)? else {
            writeln!(out)?;
            break;
        };

        score.answered += 1;
        match question.grade(&choice) {
            Grade::Correct => {
                score.correct += 1;
                writeln!(out, "{}", "Correct!".green().bold())?;
            }
            Grade::Incorrect { answer } => {
                let label = question.option_label(&answer).unwrap_or(answer);
                writeln!(out, "{} The answer is {}", "Incorrect.".red().bold(), label)?;
            }
        }

        if !question.explanation.trim().is_empty() {
            writeln!(out, "{}", question.explanation.trim().italic())?;
        }
        writeln!(out)?;
    }

    writeln!(
        out,
        "{} {}/{}",
        "Score:".cyan().bold(),
        score.correct,
        score.total
    )?;

    Ok(score)
}

fn print_question<W: Write>(out: &mut W, number: usize, q: &Question) -> io::Result<()> {
    writeln!(out, "{} {}", format!("Q{}:", number).bold(), q.question)?;
    for key in q.options.keys() {
        if let Some(label) = q.option_label(key) {
            writeln!(out, "  {}", label)?;
        }
    }
    Ok(())
}

/// Prompt until the input names an option. `None` on end of input.
fn read_choice<R: BufRead, W: Write>(
    q: &Question,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<String>> {
    let keys: Vec<&str> = q.options.keys().map(String::as_str).collect();

    loop {
        write!(out, "Your answer: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if let Some(key) = q.resolve_choice(&line) {
            return Ok(Some(key.to_string()));
        }
        writeln!(out, "Please choose one of {}", keys.join(", "))?;
    }
}
