use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cards::{parse_board, parse_hand};
use crate::display::{
    board_display, convergence_table, equity_bar, ev_table, frequency_table, print_error,
    scenario_block,
};
use crate::equity::OpponentModel;
use crate::session::QuizMode;

#[derive(Parser)]
#[command(name = "trainer", version = "0.2.0", about = "Hold'em trainer — seat draws, dealt scenarios, EV drills, Monte Carlo equity, and equilibrium demos.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, ValueEnum)]
enum QuizModeArg {
    #[value(name = "score-attack")]
    ScoreAttack,
    #[value(name = "turn-equity")]
    TurnEquity,
}

impl QuizModeArg {
    fn to_mode(&self) -> QuizMode {
        match self {
            QuizModeArg::ScoreAttack => QuizMode::ScoreAttack,
            QuizModeArg::TurnEquity => QuizMode::TurnEquity,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a random seat from the 8-handed lineup
    Position {
        /// Number of draws
        #[arg(short = 'n', long, default_value = "1")]
        count: u64,
        /// RNG seed for reproducible draws
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Deal a practice spot for a street
    Scenario {
        /// Street to deal (preflop, flop, turn, river)
        street: String,
        /// RNG seed for a reproducible deal
        #[arg(long)]
        seed: Option<u64>,
        /// Emit the scenario as JSON
        #[arg(long)]
        json: bool,
    },
    /// Expected value of a bet from fold equity and pot equity
    Ev {
        /// Current pot size
        pot: f64,
        /// Bet size
        bet: f64,
        /// Chance the villain folds (0-1)
        #[arg(short = 'f', long = "fold-equity")]
        fold_equity: f64,
        /// Chance of winning when called (0-1)
        #[arg(short = 'c', long = "continue-equity")]
        continue_equity: f64,
        /// Reject probabilities outside 0..=1 instead of passing them through
        #[arg(long)]
        checked: bool,
    },
    /// Monte Carlo equity for a hand against a villain model
    Equity {
        /// Your hole cards (e.g., AhKs)
        hero: String,
        /// Villain's exact hole cards; omit for a random hand
        #[arg(long)]
        villain: Option<String>,
        /// Board cards so far (e.g., Ks9d4c)
        #[arg(short, long)]
        board: Option<String>,
        /// Number of Monte Carlo trials
        #[arg(short = 'n', long, default_value = "10000")]
        trials: u32,
        /// RNG seed; forces the sequential reproducible path
        #[arg(long)]
        seed: Option<u64>,
        /// Emit the estimate as JSON
        #[arg(long)]
        json: bool,
    },
    /// Regret-matching self-play on rock-paper-scissors
    Equilibrium {
        /// Number of self-play rounds
        #[arg(short = 'n', long, default_value = "100000")]
        rounds: u64,
        /// Snapshot interval for the convergence table
        #[arg(long, default_value = "10000")]
        every: u64,
        /// RNG seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
        /// Emit the final state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Interactive quiz — answer EV or equity questions against the engine
    Quiz {
        /// Quiz mode
        #[arg(short, long, default_value = "score-attack")]
        mode: QuizModeArg,
        /// Number of questions before the session ends
        #[arg(short = 'n', long, default_value = "10")]
        questions: u32,
        /// RNG seed for a reproducible question deck
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

pub fn run() {
    let cli = Cli::parse();
    dispatch(cli);
}

fn dispatch(cli: Cli) {
    match cli.command {
        Commands::Position { count, seed } => cmd_position(count, seed),
        Commands::Scenario { street, seed, json } => cmd_scenario(street, seed, json),
        Commands::Ev {
            pot,
            bet,
            fold_equity,
            continue_equity,
            checked,
        } => cmd_ev(pot, fold_equity, continue_equity, bet, checked),
        Commands::Equity {
            hero,
            villain,
            board,
            trials,
            seed,
            json,
        } => cmd_equity(hero, villain, board, trials, seed, json),
        Commands::Equilibrium {
            rounds,
            every,
            seed,
            json,
        } => cmd_equilibrium(rounds, every, seed, json),
        Commands::Quiz {
            mode,
            questions,
            seed,
        } => crate::play::quiz_command(mode.to_mode(), questions, seed),
    }
}

fn cmd_position(count: u64, seed: Option<u64>) {
    use crate::position::{assign, ALL_POSITIONS};

    if count == 0 {
        print_error("Count must be at least 1");
        return;
    }

    let mut rng = seeded_rng(seed);

    if count == 1 {
        let seat = assign(&mut rng);
        println!();
        println!("  You are {}", seat.as_str().bold());
        println!();
        return;
    }

    let mut tallies = [0u64; 8];
    for _ in 0..count {
        tallies[assign(&mut rng).seat_index()] += 1;
    }

    let rows: Vec<(&str, u64)> = ALL_POSITIONS
        .iter()
        .map(|p| (p.as_str(), tallies[p.seat_index()]))
        .collect();

    println!();
    println!("  {} draws across the table", count.to_string().bold());
    println!("{}", frequency_table(&rows, count));
    println!();
}

fn cmd_scenario(street: String, seed: Option<u64>, json: bool) {
    use crate::scenario::{generate, Street};

    let street = match Street::from_str(&street) {
        Ok(s) => s,
        Err(e) => {
            print_error(&e.to_string());
            return;
        }
    };

    let mut rng = seeded_rng(seed);
    let spot = match generate(street, &mut rng) {
        Ok(s) => s,
        Err(e) => {
            print_error(&e.to_string());
            return;
        }
    };

    if json {
        match serde_json::to_string_pretty(&spot) {
            Ok(text) => println!("{}", text),
            Err(e) => print_error(&e.to_string()),
        }
        return;
    }

    println!();
    println!("{}", scenario_block(&spot));
    println!();
}

fn cmd_ev(pot: f64, fold_equity: f64, continue_equity: f64, bet: f64, checked: bool) {
    use crate::ev::{breakdown, expected_value_checked};

    if checked {
        if let Err(e) = expected_value_checked(pot, fold_equity, continue_equity, bet) {
            print_error(&e.to_string());
            return;
        }
    }

    let split = breakdown(pot, fold_equity, continue_equity, bet);

    println!();
    println!("{}", ev_table(pot, fold_equity, continue_equity, bet, &split));

    let verdict = if split.total >= 0.0 {
        "BET".green().bold().to_string()
    } else {
        "CHECK".red().bold().to_string()
    };
    println!("  Verdict: {}", verdict);
    println!();
}

fn cmd_equity(
    hero: String,
    villain: Option<String>,
    board: Option<String>,
    trials: u32,
    seed: Option<u64>,
    json: bool,
) {
    use crate::equity::{estimate, estimate_parallel};

    let hero_cards = match parse_hand(&hero) {
        Ok(h) => h,
        Err(e) => {
            print_error(&e.to_string());
            return;
        }
    };

    let model = match &villain {
        Some(v) => match parse_hand(v) {
            Ok(h) => OpponentModel::Exact(h),
            Err(e) => {
                print_error(&e.to_string());
                return;
            }
        },
        None => OpponentModel::Random,
    };

    let board_cards = match &board {
        Some(b) => match parse_board(b) {
            Ok(c) => c,
            Err(e) => {
                print_error(&e.to_string());
                return;
            }
        },
        None => Vec::new(),
    };

    let result = match seed {
        Some(s) => {
            let mut rng = StdRng::seed_from_u64(s);
            estimate(hero_cards, &board_cards, model, trials, &mut rng)
        }
        None => estimate_parallel(hero_cards, &board_cards, model, trials),
    };

    let result = match result {
        Ok(r) => r,
        Err(e) => {
            print_error(&e.to_string());
            return;
        }
    };

    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(text) => println!("{}", text),
            Err(e) => print_error(&e.to_string()),
        }
        return;
    }

    let versus = match &villain {
        Some(v) => format!(" vs {}", v.bold()),
        None => " vs a random hand".to_string(),
    };
    let on_board = if board_cards.is_empty() {
        String::new()
    } else {
        format!(" on {}", board_display(&board_cards))
    };

    println!();
    println!("  {}{}{}", hero.bold(), versus, on_board);
    println!();
    println!("  Hero: {}", equity_bar(result.win_probability, 30));
    println!();
    println!("  {}", result);
    println!();
}

fn cmd_equilibrium(rounds: u64, every: u64, seed: Option<u64>, json: bool) {
    use crate::equilibrium::{EquilibriumSimulator, EquilibriumState};

    let mut rng = seeded_rng(seed);
    let simulator = EquilibriumSimulator::rps();
    let snapshots = simulator.run(EquilibriumState::new(), rounds, &mut rng);

    let last = match snapshots.last() {
        Some(s) => *s,
        None => {
            print_error("No rounds played");
            return;
        }
    };

    if json {
        match serde_json::to_string_pretty(&last) {
            Ok(text) => println!("{}", text),
            Err(e) => print_error(&e.to_string()),
        }
        return;
    }

    let every = every.max(1);
    let sampled: Vec<EquilibriumState> = snapshots
        .iter()
        .copied()
        .filter(|s| s.rounds_played % every == 0 || s.rounds_played == rounds)
        .collect();

    println!();
    println!(
        "  Regret-matching self-play, {} rounds",
        rounds.to_string().bold()
    );
    println!("{}", convergence_table(&sampled));
    println!();
}
