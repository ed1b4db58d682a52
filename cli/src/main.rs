use clap::Parser;
use poles_cli::{Cli, init_logging, run};

fn main() -> anyhow::Result<()> {
    let Cli {} = Cli::parse();
    init_logging();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(stdin.lock(), stdout.lock())
}
