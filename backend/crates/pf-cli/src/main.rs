//! pf - portfolio project recorder
//!
//! Records personal projects and external references, printing JSON.
//!
//! # Examples
//!
//! ```bash
//! # Personal project
//! pf personal --name "Poster" --field "Print" --year 2022
//!
//! # External reference with source links
//! pf external --name "Specimen" --field "Typography" --links "https://a.com, https://b.com"
//!
//! # Everything recorded so far
//! pf list --pretty
//! ```

use pf_cli::{Cli, error_body, execute, initialize_logger, open_database, render};
use pf_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::error;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty();

    match run(cli).await {
        Ok(value) => print(&value, pretty, ExitCode::SUCCESS),
        Err(e) => {
            error!("{e}");
            print(&error_body(&e), pretty, ExitCode::FAILURE)
        }
    }
}

async fn run(cli: Cli) -> pf_cli::Result<Value> {
    let config = Config::load()?;
    config.validate()?;

    initialize_logger(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let pool = open_database(&config).await?;
    execute(cli, &config, pool).await
}

fn print(value: &Value, pretty: bool, code: ExitCode) -> ExitCode {
    match render(value, pretty) {
        Ok(json) => {
            println!("{json}");
            code
        }
        Err(e) => {
            eprintln!("Error serializing response: {e}");
            ExitCode::FAILURE
        }
    }
}
