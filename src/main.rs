//! CLI entry point for quilting textures from PNG sources

use clap::Parser;
use quiltseam::io::cli::{Cli, FileProcessor};

fn main() -> quiltseam::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
