use std::sync::Arc;

use directions::client::{DirectionsApiCredentials, DirectionsClient};
use tracking::LocationStore;
use web::{config::ServerConfig, start_web_server, WebState};

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = ServerConfig::from_env();

    // routing provider
    let credentials = DirectionsApiCredentials::env();
    if credentials.is_none() {
        log::warn!("ORS_API_KEY not set; /api/realroute will return errors.");
    }

    // location store, one table for the whole process
    let state = WebState {
        store: Arc::new(LocationStore::new()),
        directions_client: Arc::new(DirectionsClient::new(credentials)),
    };

    // web server
    let web_future = start_web_server(config, state);

    let _ = web_future.await;
}
