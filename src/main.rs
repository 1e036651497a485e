use anyhow::Result;
use clap::Parser;

use numagg::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
