pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;

use std::io;

use api::client::SdmApi;
use api::endpoints::Endpoints;
use auth::credentials::{ClientConfig, Credentials};
use cli::output::print_error;
use config::{OutputMode, RuntimeConfig};
use error::AppError;

fn finish(result: Result<(), AppError>, config: &RuntimeConfig) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            print_error(&err, config.output_mode);
            err.exit_code()
        }
    }
}

/// Entry point of `nest-thermostats`. Returns the process exit code.
pub async fn run_reporter(cli_args: cli::ReportCli) -> i32 {
    config::init(cli_args.verbose);

    let config = RuntimeConfig {
        output_mode: cli_args.output_mode(),
    };

    let result = report(&config).await;
    finish(result, &config)
}

async fn report(config: &RuntimeConfig) -> Result<(), AppError> {
    let credentials = Credentials::from_env()?;
    tracing::debug!(?credentials, mode = ?config.output_mode, "starting thermostat report");

    let api = SdmApi::new(credentials.client.clone(), Endpoints::google())?;
    let mut out = io::stdout();
    cli::report::run(&api, &credentials.refresh_token, config.output_mode, &mut out).await
}

/// Entry point of `nest-authorize`. Returns the process exit code.
pub async fn run_authorizer(cli_args: cli::AuthorizeCli) -> i32 {
    config::init(cli_args.verbose);

    let config = RuntimeConfig {
        output_mode: OutputMode::Text,
    };

    let result = authorize().await;
    finish(result, &config)
}

async fn authorize() -> Result<(), AppError> {
    let client = ClientConfig::from_env()?;
    tracing::debug!(?client, "starting authorization");

    let api = SdmApi::new(client, Endpoints::google())?;
    let mut out = io::stdout();
    cli::authorize::run(&api, &mut out).await?;
    Ok(())
}
