//! Binary entry point: flags, environment, channels, terminal.

use std::io;
use std::sync::mpsc;

use clap::Parser;

use puppy_bowl::api::{ApiClient, ApiConfig};
use puppy_bowl::provider;
use puppy_bowl::ui::{self, App};

/// Terminal roster client for the Puppy Bowl API.
#[derive(Debug, Parser)]
#[command(name = "puppy-bowl", version, about)]
struct Args {
    /// Override the API base URL (also: PUPPY_BOWL_API_URL).
    #[arg(long)]
    api_url: Option<String>,

    /// Override the cohort segment of the API path (also: PUPPY_BOWL_COHORT).
    #[arg(long)]
    cohort: Option<String>,

    /// Serve a seeded in-memory roster instead of the live API.
    #[arg(long)]
    demo: bool,

    /// Demo roster seed.
    #[arg(long, default_value_t = 2305)]
    seed: u64,
}

fn main() -> io::Result<()> {
    let _ = dotenvy::from_filename(".env");
    // Quiet by default: the alternate screen owns the terminal, so logs
    // only appear when RUST_LOG asks for them (redirect stderr to keep
    // the screen clean, e.g. `RUST_LOG=debug puppy-bowl 2>puppy.log`).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let args = Args::parse();

    let (command_tx, command_rx) = mpsc::channel();
    let (update_tx, update_rx) = mpsc::channel();

    let _provider = if args.demo {
        provider::demo::spawn_demo(args.seed, command_rx, update_tx)
    } else {
        let config = ApiConfig::resolve(args.api_url, args.cohort);
        log::info!("using API at {}", config.players_url());
        provider::spawn(ApiClient::new(config), command_rx, update_tx)
    };

    let mut app = App::new(command_tx);
    app.request_refresh();

    let result = ui::run(&mut app, update_rx);
    if let Err(err) = &result {
        eprintln!("error: {err}");
    }
    result
}
