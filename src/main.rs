use std::error::Error;
use std::sync::Arc;
use log::{info, warn};

use sealion_review::config::AppConfig;
use sealion_review::providers::SeaLionClient;
use sealion_review::web::{create_router, AppState};
use sealion_review::Reviewer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>>
{   dotenv::dotenv().ok();
    env_logger::Builder::from_env(
      env_logger::Env::default().default_filter_or("info")
    ).init();

    let config = AppConfig::from_env()?;
    if config.provider.api_key.is_none()
    {   warn!("SEA_LION_API_KEY is not set; every request will report it");
    }

    let default_model = config.provider.default_model.clone();
    let client = SeaLionClient::new(config.provider)?;
    let state = AppState
    {   reviewer: Reviewer::new(Arc::new(client))
      , default_model
    };

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Serving review form on http://{}", addr);

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
