use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::display::{history_table, print_error, scenario_block, verdict_line};
use crate::error::TrainerResult;
use crate::session::{Question, QuizMode, QuizSession, SessionSnapshot};

// ---------------------------------------------------------------------------
// Input helpers
// ---------------------------------------------------------------------------

fn prompt(
    message: &str,
    default: Option<&str>,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> String {
    if let Some(d) = default {
        write!(writer, "{} [{}]: ", message, d).ok();
    } else {
        write!(writer, "{}: ", message).ok();
    }
    writer.flush().ok();

    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => "q".to_string(),
        Ok(_) => {
            let trimmed = line.trim().to_string();
            if trimmed.is_empty() {
                default.unwrap_or("").to_string()
            } else {
                trimmed
            }
        }
        Err(_) => "q".to_string(),
    }
}

enum Answer {
    Quit,
    Value(f64),
}

fn read_answer(reader: &mut dyn BufRead, writer: &mut dyn Write) -> Answer {
    loop {
        let text = prompt("  Your answer", None, reader, writer);
        if text.to_lowercase() == "q" {
            return Answer::Quit;
        }
        match text.parse::<f64>() {
            Ok(v) => return Answer::Value(v),
            Err(_) => {
                writeln!(writer, "  {}", "Enter a number, e.g. 42 or 0.55".red()).ok();
            }
        }
    }
}

/// Turn-equity answers read naturally as percentages; anything above
/// 1.0 is treated as one.
fn normalize_answer(snapshot: &SessionSnapshot, value: f64) -> f64 {
    match &snapshot.question {
        Some(Question::TurnEquity { .. }) if value > 1.0 => value / 100.0,
        _ => value,
    }
}

// ---------------------------------------------------------------------------
// Interactive quiz
// ---------------------------------------------------------------------------

pub fn quiz_command(mode: QuizMode, questions: u32, seed: Option<u64>) {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut reader = stdin.lock();
    let mut writer = stdout.lock();
    if let Err(e) = run_quiz(mode, questions, seed, &mut reader, &mut writer) {
        print_error(&e.to_string());
    }
}

pub fn run_quiz(
    mode: QuizMode,
    questions: u32,
    seed: Option<u64>,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> TrainerResult<()> {
    writeln!(writer).ok();
    writeln!(
        writer,
        "{}",
        format!("{} \u{2014} {} questions", mode.title(), questions)
            .cyan()
            .bold()
    )
    .ok();
    writeln!(writer, "Type {} at any prompt to quit early.\n", "'q'".bold()).ok();

    let mut session = QuizSession::new(mode, seed);
    let mut snapshot = session.start()?;

    loop {
        render_question(&snapshot, writer);

        let value = match read_answer(reader, writer) {
            Answer::Quit => break,
            Answer::Value(v) => normalize_answer(&snapshot, v),
        };

        snapshot = session.submit_answer(value)?;
        if let Some(verdict) = snapshot.last_verdict {
            writeln!(writer, "  {}", verdict_line(&verdict)).ok();
        }

        if snapshot.question_number >= questions {
            break;
        }
        snapshot = session.next()?;
    }

    let final_view = session.end()?;
    render_summary(&final_view, writer);
    Ok(())
}

fn render_question(snapshot: &SessionSnapshot, writer: &mut dyn Write) {
    writeln!(
        writer,
        "\n{}",
        format!("--- Question {} ---", snapshot.question_number)
            .cyan()
            .bold()
    )
    .ok();
    match &snapshot.question {
        Some(Question::ScoreAttack {
            pot,
            fold_equity,
            continue_equity,
            bet,
        }) => {
            writeln!(
                writer,
                "  Pot {:.0}, bet {:.0}. Villain folds {:.0}% of the time; you win {:.0}% when called.",
                pot,
                bet,
                fold_equity * 100.0,
                continue_equity * 100.0,
            )
            .ok();
            writeln!(writer, "  {}", "What is the EV of betting, in chips?".bold()).ok();
        }
        Some(Question::TurnEquity { scenario }) => {
            writeln!(writer, "{}", scenario_block(scenario)).ok();
            writeln!(
                writer,
                "  {}",
                "Estimate your equity vs a random hand (0-1 or %).".bold()
            )
            .ok();
        }
        None => {}
    }
}

fn render_summary(snapshot: &SessionSnapshot, writer: &mut dyn Write) {
    writeln!(writer, "\n{}", "--- Session Over ---".cyan().bold()).ok();
    let answered = snapshot.history.len();
    let correct = snapshot.history.iter().filter(|v| v.correct).count();
    writeln!(
        writer,
        "  Final score {} ({} of {} correct)",
        snapshot.score.to_string().bold(),
        correct,
        answered,
    )
    .ok();
    if !snapshot.history.is_empty() {
        writeln!(writer, "{}", history_table(&snapshot.history)).ok();
    }
    writeln!(writer).ok();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
