use clap::Parser;
use uni_finder::utils::error::ErrorSeverity;
use uni_finder::utils::{logger, validation::Validate};
use uni_finder::{App, AppError, CliConfig};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting uni-finder");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(cli).await {
        tracing::error!(
            "❌ uni-finder failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(cli: CliConfig) -> Result<(), AppError> {
    let settings = cli.to_settings()?;
    settings.validate()?;

    let app = App::new(settings)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let summary = app.run(stdin.lock(), stdout.lock()).await?;
    match &summary.selected {
        Some(country) => tracing::info!(
            "✅ Showed {} universities for {}",
            summary.universities,
            country.country
        ),
        None => tracing::info!("✅ Showed {} countries", summary.countries),
    }

    Ok(())
}
