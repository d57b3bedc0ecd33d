use clap::Parser;
use restaurant_directory::utils::{logger, validation::Validate};
use restaurant_directory::{
    run_command, CliConfig, Clock, DirectoryConfig, DirectoryError, FixedClock, SystemClock,
};
use std::sync::Arc;

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<(), DirectoryError> {
    config.validate()?;

    tracing::info!("📁 Loading directory from: {}", config.config);
    let directory = DirectoryConfig::from_file(&config.config)?;

    let clock: Arc<dyn Clock> = match config.at {
        Some(at) => {
            tracing::info!("🕒 Evaluating hours at {}", at);
            Arc::new(FixedClock::new(at))
        }
        None => Arc::new(SystemClock),
    };

    let stdout = std::io::stdout();
    run_command(&config.command, &directory, clock, config.json, &mut stdout.lock())
}
