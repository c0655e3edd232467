// Runs the built-in global-fixture probe scenario.
// Usage: cargo run --bin fixture_probe -- [--on-setup-failure skip|run] [--format text|junit|json]

use gantry::cli;

fn main() {
    std::process::exit(cli::run());
}
