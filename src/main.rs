use clap::Parser;
use small_numerics::app::handlers::{factorial_response, prime_response};
use small_numerics::config::cli::Command;
use small_numerics::utils::{logger, validation::Validate};
use small_numerics::{multiply, CalcError, CliConfig, Settings};
use std::time::Instant;

fn run(config: &CliConfig, settings: &Settings) -> Result<String, CalcError> {
    let started = Instant::now();

    match &config.command {
        Command::Factorial { number } => {
            let resp = factorial_response(*number, settings, started)?;
            if config.json {
                Ok(serde_json::to_string_pretty(&resp)?)
            } else {
                Ok(resp.factorial)
            }
        }
        Command::Prime { number } => {
            let resp = prime_response(*number, started);
            if config.json {
                Ok(serde_json::to_string_pretty(&resp)?)
            } else {
                Ok(resp.message)
            }
        }
        Command::Multiply { a, b } => {
            let product = multiply(a, b)?;
            if config.json {
                let body = serde_json::json!({ "a": a, "b": b, "product": product });
                Ok(serde_json::to_string_pretty(&body)?)
            } else {
                Ok(product)
            }
        }
    }
}

fn main() {
    let config = CliConfig::parse();

    let settings = match config.resolve().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(config.verbose, None);
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(config.verbose, settings.log_level.as_deref());
    tracing::debug!("CLI config: {:?}, settings: {:?}", config, settings);

    match run(&config, &settings) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("❌ {} (status {})", e, e.status_code());
            eprintln!("❌ {}", e.user_friendly_message());

            let exit_code = if e.is_client_error() { 1 } else { 3 };
            std::process::exit(exit_code);
        }
    }
}
