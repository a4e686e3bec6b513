use std::process::ExitCode;

use anyhow::Result;
use gh_client::{TokenResolver, build_client};
use pr_limits_config::ActionConfig;

mod logger;
mod run;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before the logger so RUST_LOG from the file applies
    let dotenv = dotenvy::dotenv();
    logger::init();

    match dotenv {
        Ok(path) => log::debug!("Loaded .env file from: {:?}", path),
        Err(_) => log::debug!(".env file not found, will rely on environment variables"),
    }

    match try_main().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn try_main() -> Result<()> {
    let config = ActionConfig::from_env()?;

    let token = TokenResolver::new(config.token.clone()).resolve()?;
    let client = build_client(token, config.api_url.as_deref())?;

    run::run(&client, &config).await?;
    Ok(())
}
