use clap::Parser;
use folio::core::progress::RandomSteps;
use folio::utils::monitor::TerminalProgress;
use folio::utils::{logger, validation::Validate};
use folio::{CliConfig, FolioEngine, HttpDataSource, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting folio");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let source = HttpDataSource::new(config.site.source.endpoint.clone());
    let storage = LocalStorage::new(config.output_path.clone());
    let engine = FolioEngine::new(source, storage, config);

    let progress = TerminalProgress::new(!cli.log_json);
    match engine.run(&progress, &mut RandomSteps::new()).await {
        Ok(outcome) if outcome.is_ready() => {
            println!("✅ Portfolio page written to {}", outcome.output_path);
        }
        Ok(outcome) => {
            // The error view was still written; report the failed load.
            eprintln!("❌ Failed to load data. Check the log above for details.");
            eprintln!("📁 Error page written to {}", outcome.output_path);
            std::process::exit(2);
        }
        Err(e) => {
            tracing::error!(
                "Rendering failed: {} (category: {:?})",
                e,
                e.category()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
