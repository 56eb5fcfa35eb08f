use holdem_trainer::cli;

fn main() {
    cli::run();
}
