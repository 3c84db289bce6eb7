mod bot;
mod config;
mod error;
mod model;
mod service;
mod startup;
mod state;
mod util;

use dioxus_logger::tracing;

use crate::{
    bot::start::{init_bot, start_bot},
    config::Config,
    error::{internal::InternalError, AppError},
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    dioxus_logger::init(config.log_level)
        .map_err(|e| AppError::InternalError(InternalError::LoggerInit(e.to_string())))?;

    let http_client = startup::setup_reqwest_client(config.http_timeout)?;
    let browser = startup::setup_browser_launcher(&config);

    let state = AppState::new(config, http_client, browser)?;

    tracing::info!(
        "Loaded {} service endpoints for /status",
        state.catalog.services.len()
    );

    let client = init_bot(state).await?;

    if let Err(e) = start_bot(client).await {
        tracing::error!("Discord bot error: {}", e);
        return Err(e);
    }

    Ok(())
}
