use clap::Parser;
use somedata_cli::utils::{logger, validation::Validate};
use somedata_cli::{ClientError, CliConfig, Console, Dispatcher, Repl, ReqwestTransport};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let transport = ReqwestTransport::new(&config).inspect_err(report)?;
    tracing::info!("Using endpoint {}", transport.base_url());

    let repl = Repl::new(Dispatcher::new(transport), Console::new(!config.no_color));
    let mut stdout = std::io::stdout();
    repl.run(BufReader::new(tokio::io::stdin()), &mut stdout)
        .await
        .inspect_err(report)?;

    Ok(())
}

fn report(e: &ClientError) {
    tracing::error!("{}", e.chain_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}
