//! Grocery Tracker CLI Entry Point

mod app;
mod cli;
mod render;
mod session_store;

use clap::Parser;
use colored::Colorize;

use cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = app::run(cli).await {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
