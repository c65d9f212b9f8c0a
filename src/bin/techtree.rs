use clap::Parser;
use colored::Colorize;
use techtree_core::cli::{self, Cli};
use techtree_core::exit::TechTreeExit;

fn main() -> TechTreeExit {
    let cli = Cli::parse();
    cli::logging::init(cli.verbose);

    let stdout = std::io::stdout();
    match cli::handlers::handle_render(&cli, &mut stdout.lock()) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red());
            TechTreeExit::Error
        }
    }
}
