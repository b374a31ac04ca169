use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "pf")]
#[command(about = "Record personal projects and external references in the portfolio")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}

impl Cli {
    pub fn pretty(&self) -> bool {
        self.pretty
    }
}
