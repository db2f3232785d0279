//! CLI entry point for the cave map generation tool

use cavegen::io::cli::{Cli, MapProcessor};
use clap::Parser;

fn main() -> cavegen::Result<()> {
    let cli = Cli::parse();
    let processor = MapProcessor::new(cli);
    processor.process()
}
