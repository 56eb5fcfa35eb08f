use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::cards::{hand_label, Card, Suit};
use crate::equilibrium::EquilibriumState;
use crate::ev::EvBreakdown;
use crate::scenario::Scenario;
use crate::session::Verdict;

pub fn equity_bar(equity: f64, width: usize) -> String {
    let filled = (equity.clamp(0.0, 1.0) * width as f64) as usize;
    let bar: String = "\u{2588}".repeat(filled) + &"\u{2591}".repeat(width - filled);
    let pct = format!("{:.1}%", equity * 100.0);

    if equity >= 0.6 {
        format!("{} {}", bar.green(), pct)
    } else if equity >= 0.4 {
        format!("{} {}", bar.yellow(), pct)
    } else {
        format!("{} {}", bar.red(), pct)
    }
}

pub fn board_display(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| {
            let face = format!("{}{}", card.rank.to_char(), card.suit.symbol());
            match card.suit {
                Suit::Spades => face.white().to_string(),
                Suit::Hearts => face.red().to_string(),
                Suit::Diamonds => face.blue().to_string(),
                Suit::Clubs => face.green().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn scenario_block(scenario: &Scenario) -> String {
    let board = if scenario.board.is_empty() {
        "--".dimmed().to_string()
    } else {
        board_display(&scenario.board)
    };
    let join = if scenario.is_join_decision_point {
        "open decision".green().to_string()
    } else {
        "no open decision".dimmed().to_string()
    };
    format!(
        "  {} | {} | {}\n  Hand:  {} ({})\n  Board: {}",
        scenario.street.to_string().bold(),
        scenario.position.to_string().bold(),
        join,
        board_display(&scenario.hole_cards),
        hand_label(&scenario.hole_cards).dimmed(),
        board,
    )
}

pub fn signed_ev(value: f64) -> String {
    if value >= 0.0 {
        format!("{:+.2}", value).green().bold().to_string()
    } else {
        format!("{:+.2}", value).red().bold().to_string()
    }
}

pub fn ev_table(
    pot: f64,
    fold_equity: f64,
    continue_equity: f64,
    bet: f64,
    breakdown: &EvBreakdown,
) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Metric").set_alignment(CellAlignment::Left),
        Cell::new("Value").set_alignment(CellAlignment::Right),
    ]);

    table.add_row(vec![
        Cell::new("Pot".bold().to_string()),
        Cell::new(format!("{:.0}", pot)),
    ]);
    table.add_row(vec![
        Cell::new("Bet".bold().to_string()),
        Cell::new(format!("{:.0}", bet)),
    ]);
    table.add_row(vec![
        Cell::new("Fold equity".bold().to_string()),
        Cell::new(format!("{:.0}%", fold_equity * 100.0)),
    ]);
    table.add_row(vec![
        Cell::new("Equity when called".bold().to_string()),
        Cell::new(format!("{:.0}%", continue_equity * 100.0)),
    ]);
    table.add_row(vec![
        Cell::new("Fold branch".bold().to_string()),
        Cell::new(format!("{:+.2}", breakdown.fold_branch)),
    ]);
    table.add_row(vec![
        Cell::new("Called branch".bold().to_string()),
        Cell::new(format!("{:+.2}", breakdown.call_branch)),
    ]);
    table.add_row(vec![
        Cell::new("EV".bold().to_string()),
        Cell::new(signed_ev(breakdown.total)),
    ]);

    table.to_string()
}

pub fn frequency_table(rows: &[(&str, u64)], total: u64) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Label").set_alignment(CellAlignment::Left),
        Cell::new("Count").set_alignment(CellAlignment::Right),
        Cell::new("Share").set_alignment(CellAlignment::Right),
    ]);

    for &(label, count) in rows {
        let share = if total == 0 {
            0.0
        } else {
            count as f64 / total as f64
        };
        table.add_row(vec![
            Cell::new(label.bold().to_string()),
            Cell::new(count.to_string()).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}%", share * 100.0)).set_alignment(CellAlignment::Right),
        ]);
    }

    table.to_string()
}

pub fn convergence_table(snapshots: &[EquilibriumState]) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Round").set_alignment(CellAlignment::Right),
        Cell::new("Rock").set_alignment(CellAlignment::Right),
        Cell::new("Paper").set_alignment(CellAlignment::Right),
        Cell::new("Scissors").set_alignment(CellAlignment::Right),
        Cell::new("Avg payoff").set_alignment(CellAlignment::Right),
    ]);

    for state in snapshots {
        let freq = state.empirical_frequencies();
        let mut row = vec![Cell::new(state.rounds_played.to_string())];
        for f in freq {
            row.push(Cell::new(format!("{:.1}%", f * 100.0)));
        }
        row.push(Cell::new(format!("{:+.4}", state.average_payoff())));
        table.add_row(
            row.into_iter()
                .map(|c| c.set_alignment(CellAlignment::Right))
                .collect::<Vec<_>>(),
        );
    }

    table.to_string()
}

pub fn verdict_line(verdict: &Verdict) -> String {
    if verdict.correct {
        format!(
            "{} expected {:.2}, answered {:.2}  (+{} points, streak {})",
            "\u{2713} Correct".green().bold(),
            verdict.expected,
            verdict.answered,
            verdict.score_delta,
            verdict.streak_after,
        )
    } else {
        format!(
            "{} expected {:.2}, answered {:.2}  (streak reset)",
            "\u{2717} Off".red().bold(),
            verdict.expected,
            verdict.answered,
        )
    }
}

pub fn history_table(history: &[Verdict]) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").set_alignment(CellAlignment::Right),
        Cell::new("Result").set_alignment(CellAlignment::Left),
        Cell::new("Expected").set_alignment(CellAlignment::Right),
        Cell::new("Answered").set_alignment(CellAlignment::Right),
        Cell::new("Points").set_alignment(CellAlignment::Right),
        Cell::new("Streak").set_alignment(CellAlignment::Right),
    ]);

    for (i, verdict) in history.iter().enumerate() {
        let result = if verdict.correct {
            "correct".green().to_string()
        } else {
            "off".red().to_string()
        };
        table.add_row(vec![
            Cell::new((i + 1).to_string()).set_alignment(CellAlignment::Right),
            Cell::new(result),
            Cell::new(format!("{:.2}", verdict.expected)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", verdict.answered)).set_alignment(CellAlignment::Right),
            Cell::new(format!("+{}", verdict.score_delta)).set_alignment(CellAlignment::Right),
            Cell::new(verdict.streak_after.to_string()).set_alignment(CellAlignment::Right),
        ]);
    }

    table.to_string()
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg);
}

pub fn print_success(msg: &str) {
    println!("{}", msg.green().bold());
}
