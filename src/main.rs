//! Card Authorizer CLI
//!
//! A streaming authorizer that reads line-delimited JSON operations and
//! writes one result per line.
//!
//! # Usage
//!
//! ```bash
//! card-authorizer < operations.jsonl > results.jsonl
//! card-authorizer operations.jsonl > results.jsonl
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use card_authorizer::{Authorizer, EngineError, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        return Err(EngineError::Usage);
    }

    let stdout = io::stdout();
    let handle = stdout.lock();

    let mut authorizer = Authorizer::new();
    match args.get(1) {
        Some(path) => {
            let file = File::open(path)?;
            authorizer.process_stream(BufReader::new(file), handle)?;
        }
        None => {
            let stdin = io::stdin();
            authorizer.process_stream(stdin.lock(), handle)?;
        }
    }

    Ok(())
}
