use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use nft_deployer::config::resolve_config;
use nft_deployer::deploy;
use nft_deployer::observability::init_logging;

#[derive(Parser)]
#[command(name = "nft-deployer")]
#[command(about = "Deploy CustomNFT, pay the fee, approve the deployer and mint", long_about = None)]
struct Cli {
    /// TOML configuration file. Built-in defaults are used when omitted.
    #[arg(short, long, env = "NFT_DEPLOY_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match resolve_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.observability);

    match deploy::execute(&config).await {
        Ok(report) => {
            tracing::info!(
                contract = %report.contract,
                minted = report.mints.len(),
                "Deployment complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Deployment failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
