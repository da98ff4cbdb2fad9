//! CLI entry point for the label sheet generator

use clap::Parser;
use labelgrid::io::cli::{Cli, LabelJob};

fn main() -> labelgrid::Result<()> {
    let cli = Cli::parse();
    let mut job = LabelJob::new(cli);
    job.run()?;
    Ok(())
}
