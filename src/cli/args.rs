use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "techtree",
    version,
    about = "Render the neighborhood of a technology as Graphviz DOT"
)]
pub struct Cli {
    /// Technology to center the graph on; omit to render the whole tree
    #[arg(value_name = "TECHNOLOGY")]
    pub technology: Option<String>,
    /// Read the catalog from a JSON file instead of the bundled one
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,
    /// Fail on an unknown or missing technology instead of rendering everything
    #[arg(long)]
    pub strict: bool,
    /// Attach cost, effect and special prerequisites as node tooltips
    #[arg(long)]
    pub details: bool,
    /// Config file (default: ./techtree.toml if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Enable debug logging on stderr
    #[arg(long, short)]
    pub verbose: bool,
}
