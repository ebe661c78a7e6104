//! Entry point for do-you-like-me
//!
//! Parses the (optional) logging flags, sets up logging and opens the
//! window. With no arguments it just opens the window.

use std::process::ExitCode;

use clap::{ArgAction, Parser};
use do_you_like_me::ui::App;

#[derive(Parser)]
#[command(name = "do-you-like-me")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Default log filter for the chosen verbosity
    fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    let app = App::new()?;
    log::info!("Starting {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if app.run() == glib::ExitCode::SUCCESS {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
