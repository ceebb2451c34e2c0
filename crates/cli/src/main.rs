use clap::Parser;
use invalid_ids_cli::args::Args;
use invalid_ids_cli::config::CliConfig;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    // Convert args to CliConfig
    let config = match CliConfig::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_target(false)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match invalid_ids_cli::execute(&config, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
