use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};
use commands::{runtime, visits};
use services::config::load_config;
use services::output::print_error;
use services::session::{Session, SessionEvent};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(err) = run(&cli) {
        print_error(cli.json, &err);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config()?.with_overrides(cli);
    tracing::debug!(?config, "resolved configuration");
    let mut session = Session::start(&config)?;
    let json = cli.json;
    match &cli.command {
        Commands::View(args) => runtime::view(json, &mut session, args),
        Commands::Table => runtime::table(json, &session),
        Commands::Gaps => runtime::gaps(json, &session),
        Commands::Summary => runtime::summary(json, &session),
        Commands::Check => runtime::check(json, &session),
        Commands::Visited => visits::visited(json, &session),
        Commands::Select { ids } => {
            visits::update(json, &mut session, SessionEvent::Select(ids.clone()))
        }
        Commands::Mark { ids } => {
            visits::update(json, &mut session, SessionEvent::Mark(ids.clone()))
        }
        Commands::Unmark { ids } => {
            visits::update(json, &mut session, SessionEvent::Unmark(ids.clone()))
        }
    }
}
