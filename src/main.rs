use lab_product::utils::logger;
use lab_product::{CliConfig, ProductEngine};
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Diagnostics only; a missing subscriber must not block the product.
    if let Err(e) = logger::init_cli_logger() {
        eprintln!("warning: {:#}", e);
    }

    let config = match CliConfig::from_argv(std::env::args_os()) {
        Ok(config) => config,
        Err(e) => {
            // Only reachable for arguments that are not valid UTF-8.
            eprintln!("error: {}", e.kind());
            return ExitCode::from(2);
        }
    };

    tracing::debug!("CLI config: {:?}", config);

    let engine = ProductEngine::new(config);

    match engine.run() {
        Ok(calculation) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{}", calculation.product).and_then(|_| stdout.flush()) {
                tracing::error!("Failed to write product: {}", e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!("Calculation failed: {} ({:?})", e, e.category());
            eprintln!("error: {}", e.user_friendly_message());
            eprintln!("{}", e.recovery_suggestion());
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
