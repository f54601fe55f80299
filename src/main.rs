use clap::Parser;
use falcone_finder::app::render;
use falcone_finder::config::LogFormat;
use falcone_finder::core::session::Session;
use falcone_finder::core::submission::SubmissionOutcome;
use falcone_finder::domain::ports::ConfigProvider;
use falcone_finder::utils::error::{ErrorSeverity, FalconeError};
use falcone_finder::utils::{logger, validation::Validate};
use falcone_finder::{CliConfig, HttpFalconeApi, Mission, TomlConfig};

fn exit_with(e: &FalconeError) -> ! {
    tracing::error!(
        "❌ Falcone search failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 4,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = match cli.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(cli.verbose);
            exit_with(&e);
        }
    };

    let verbose = cli.verbose || file_config.as_ref().is_some_and(TomlConfig::verbose);
    let json = cli.log_format == LogFormat::Json
        || file_config.as_ref().map(TomlConfig::log_format) == Some(LogFormat::Json);
    if json {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting falcone-finder");
    tracing::debug!("CLI config: {:?}", cli);

    let validation = match &file_config {
        Some(config) => config.validate(),
        None => Ok(()),
    }
    .and_then(|_| cli.validate());
    if let Err(e) = validation {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    for flag in cli.flags_overridden_by_file() {
        tracing::warn!("{} is ignored: --config supplies the API settings", flag);
    }

    let provider: &dyn ConfigProvider = match &file_config {
        Some(config) => config,
        None => &cli,
    };
    let api = match HttpFalconeApi::new(provider) {
        Ok(api) => api,
        Err(e) => exit_with(&e),
    };

    if cli.list {
        let mut session = Session::new(api);
        session.load().await;
        println!("{}", render::render_catalog(session.tracker()));
        return Ok(());
    }

    let assignments = if cli.assign.is_empty() {
        file_config
            .as_ref()
            .map(|c| c.assignments.clone())
            .unwrap_or_default()
    } else {
        cli.assign.clone()
    };
    if assignments.is_empty() {
        exit_with(&FalconeError::MissingConfigError {
            field: "assign".to_string(),
        });
    }

    let mut mission = Mission::new(api);
    match mission.run(&assignments).await {
        Ok(report) => {
            println!("{}", render::render_report(&report));
            match report.outcome {
                SubmissionOutcome::Found { .. } | SubmissionOutcome::NotFound { .. } => Ok(()),
                SubmissionOutcome::TokenFailed | SubmissionOutcome::FindFailed => {
                    std::process::exit(2)
                }
            }
        }
        Err(e) => exit_with(&e),
    }
}
