use cadastro_app::cli::Cli;
use cadastro_app::{AppError, AppResult, Layout, OutputMode, Session, logger};

use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

use cadastro_config::Config;
use clap::Parser;
use log::info;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    // Load and validate configuration
    let mut config = Config::load()?;
    if let Some(width) = cli.width {
        config.ui.width = width;
    }
    config.validate()?;

    // Initialize logger (before any other logging)
    let log_file_path = config.log_file_path()?;
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting cadastro v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let output = if cli.json {
        OutputMode::Json { pretty: cli.pretty }
    } else {
        OutputMode::Text(Layout::from_config(&config.ui))
    };
    let mut session = Session::new(output);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.script {
        Some(path) => {
            info!("Reading commands from {}", path.display());
            let file = File::open(&path).map_err(|e| AppError::Script {
                path: path.clone(),
                source: e,
            })?;
            session.run(BufReader::new(file), &mut out)
        }
        None => session.run(io::stdin().lock(), &mut out),
    }
}
