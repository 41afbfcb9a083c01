//! CLI entry point for the `stations` command-line tool.

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use station_graph::cli::{self, LineEditor, StreamConsole};
use station_graph::config::{resolve_config_path, Overrides};
use station_graph::{Config, GraphError, GraphResult, StationGraph};

#[derive(Parser)]
#[command(
    name = "stations",
    about = "Build and inspect a small graph of stations and connections"
)]
struct Cli {
    /// TOML config file (defaults to $STATIONS_CONFIG, then ./stations.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum number of stations
    #[arg(long)]
    max_stations: Option<usize>,

    /// Maximum number of connections
    #[arg(long)]
    max_connections: Option<usize>,

    /// Remove both capacity limits
    #[arg(long)]
    unbounded: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

fn load_config(cli: &Cli, path: Option<&Path>) -> GraphResult<Config> {
    let mut config = match path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.apply_overrides(&Overrides {
        max_stations: cli.max_stations,
        max_connections: cli.max_connections,
        unbounded: cli.unbounded,
        no_color: cli.no_color,
    })?;
    Ok(config)
}

fn run(config: &Config) -> GraphResult<()> {
    let mut graph = StationGraph::with_config(config);

    if io::stdin().is_terminal() {
        let mut console = LineEditor::new(config.color)?;
        cli::run(&mut graph, &mut console)
    } else {
        let color = config.color && io::stdout().is_terminal();
        let mut console = StreamConsole::new(io::stdin().lock(), io::stdout(), color);
        cli::run(&mut graph, &mut console)
    }
}

fn main() {
    let cli = Cli::parse();

    let config_path = resolve_config_path(cli.config.as_deref());
    let config = match load_config(&cli, config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    match &config_path {
        Some(path) => log::debug!("loaded config from {}", path.display()),
        None => log::debug!("no config file found, using defaults"),
    }
    log::debug!("starting with {:?}", config.limits());

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Config(_) => 2,
            _ => 3,
        };
        process::exit(code);
    }
}
