//! route-graph: answer route queries over a weighted directed graph.
//!
//! Usage:
//!   route-graph < towns.txt
//!   route-graph --input towns.txt --format json
//!   ROUTE_GRAPH_LOG=debug route-graph -i towns.txt

mod config;
mod input;
mod labels;
mod logging;
mod output;
mod session;

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};

use crate::config::{Command, FORMAT_ENV};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let env_format = std::env::var(FORMAT_ENV).ok();

    let settings = match config::parse_args(&args, env_format.as_deref())? {
        Command::Help => {
            println!("{}", config::usage());
            return Ok(());
        }
        Command::Run(settings) => settings,
    };

    logging::init(settings.log_filter.as_deref());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &settings.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening input {}", path.display()))?;
            session::run(BufReader::new(file), &mut out, settings.format)?;
        }
        None => {
            let stdin = io::stdin();
            session::run(stdin.lock(), &mut out, settings.format)?;
        }
    }

    Ok(())
}
