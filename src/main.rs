use clap::Parser;
use skywards_greeter::utils::{logger, validation::Validate};
use skywards_greeter::{CliConfig, GreeterEngine, SimpleProgram, StdoutSink};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting skywards-greeter CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let sink = StdoutSink::new();
    let program = SimpleProgram::new(sink, config);
    let engine = GreeterEngine::new(program);

    match engine.run().await {
        Ok(report) => {
            tracing::info!(
                "Run completed: {} greetings, sum {}",
                report.greetings_sent,
                report.sum
            );
        }
        Err(e) => {
            tracing::error!("Run failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
