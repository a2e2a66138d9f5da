//! # GOTO BASIC
//!
//! A line numbered, GOTO driven BASIC.
//!

use clap::Parser;
use std::path::PathBuf;

mod term;

/// Interactive interpreter for GOTO BASIC
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Program to load at start
    file: Option<PathBuf>,
    /// Run the loaded program immediately
    #[arg(long, requires = "file")]
    run: bool,
    /// Statements executed between checks for CTRL-C
    #[arg(long, default_value_t = 5000)]
    cycles: usize,
}

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));
    let args = Args::parse();
    term::main(term::Config {
        file: args.file,
        run: args.run,
        cycles: args.cycles.max(1),
    });
}
