use clap::{Parser, Subcommand};
use std::path::Path;

use crate::services::{render_table, CostAggregator};
use crate::types::ResultsFile;

/// Fixed input location, resolved against the current working directory
const RESULTS_PATH: &str = "results.json";

/// Per-provider cost reporting for LLM evaluation results
#[derive(Parser)]
#[command(name = "evalcost")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the per-provider cost table from ./results.json (default)
    Report,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            None | Some(Commands::Report) => {
                let file = ResultsFile::load(Path::new(RESULTS_PATH))?;
                let rows = CostAggregator::report_rows(file.records());
                print!("{}", render_table(&rows));
                Ok(())
            }
        }
    }
}
