use clap::Parser;

use locsearch::cli::{run, Cli};
use locsearch::logging::init_tracing;

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
