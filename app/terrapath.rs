//! Terminal A* demo over randomly generated terrain.
//!
//! Run: cargo run --bin terrapath -- --seed 7 --verify

use std::io::{self, IsTerminal};

use clap::Parser;
use terrapath::{Args, RunConfig, run};

fn main() {
    let mut cfg = RunConfig::from(Args::parse());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cfg.log_filter()))
        .init();

    let stdout = io::stdout();
    cfg.color &= stdout.is_terminal();
    if let Err(e) = run(&cfg, &mut stdout.lock()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
