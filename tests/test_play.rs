use holdem_trainer::ev;
use holdem_trainer::play::run_quiz;
use holdem_trainer::session::{Question, QuizMode, QuizSession};

fn run(mode: QuizMode, questions: u32, seed: u64, input: &str) -> String {
    let mut reader = input.as_bytes();
    let mut output = Vec::new();
    run_quiz(mode, questions, Some(seed), &mut reader, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

/// The exact answer to the first score-attack question a seed produces,
/// learned by replaying the same seed through a bare session.
fn first_answer(seed: u64) -> f64 {
    let mut probe = QuizSession::new(QuizMode::ScoreAttack, Some(seed));
    let snapshot = probe.start().unwrap();
    match &snapshot.question {
        Some(Question::ScoreAttack {
            pot,
            fold_equity,
            continue_equity,
            bet,
        }) => ev::expected_value(*pot, *fold_equity, *continue_equity, *bet),
        other => panic!("expected a score-attack question, got {:?}", other),
    }
}

#[test]
fn test_seeded_correct_answer_scores() {
    let answer = first_answer(42);
    let out = run(QuizMode::ScoreAttack, 3, 42, &format!("{}\nq\n", answer));
    assert!(out.contains("Correct"));
    assert!(out.contains("streak 1"));
}

#[test]
fn test_wrong_answer_reports_the_miss() {
    let out = run(QuizMode::ScoreAttack, 3, 42, "999999\nq\n");
    assert!(out.contains("Off"));
    assert!(out.contains("streak reset"));
}

#[test]
fn test_session_stops_after_requested_questions() {
    let out = run(QuizMode::ScoreAttack, 1, 8, "0\n");
    assert!(out.contains("Question 1"));
    assert!(!out.contains("Question 2"));
    assert!(out.contains("Session Over"));
}

#[test]
fn test_summary_tabulates_the_history() {
    let out = run(QuizMode::ScoreAttack, 2, 9, "0\n0\n");
    assert!(out.contains("Final score"));
    assert!(out.contains("Expected"));
    assert!(out.contains("Answered"));
    assert!(out.contains("Streak"));
}

#[test]
fn test_turn_equity_accepts_percent_answers() {
    // 55 reads as 55%, which lands in 0..=1 after normalization.
    let out = run(QuizMode::TurnEquity, 2, 21, "55\nq\n");
    assert!(out.contains("Estimate your equity"));
    assert!(out.contains("answered 0.55"));
}

#[test]
fn test_prompt_mentions_the_mode_and_length() {
    let out = run(QuizMode::TurnEquity, 4, 2, "q\n");
    assert!(out.contains("Turn Equity"));
    assert!(out.contains("4 questions"));
}
