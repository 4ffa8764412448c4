use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::FromRef,
    routing::{get, get_service, on, post},
    Router,
};
use directions::client::DirectionsClient;
use model::location::NurseLocation;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tracking::LocationStore;

use crate::common::{route_not_found, schema, METHOD_FILTER_ALL};
use crate::config::{ServerConfig, TlsMode};

pub mod api;
pub mod common;
pub mod config;
pub mod locations;
pub mod tls;

pub const PUBLIC_DIR: &str = "./public/";

#[derive(Clone, FromRef)]
pub struct WebState {
    pub store: Arc<LocationStore>,
    pub directions_client: Arc<DirectionsClient>,
}

pub fn router(state: WebState) -> Router {
    Router::new()
        .route("/update-location", post(locations::update_location))
        .route("/get-location", get(locations::get_location))
        .route("/get-location/schema", get(schema::<NurseLocation>))
        .with_state(state.clone())
        .nest_service("/api", api::routes(state))
        .fallback_service(static_content_router())
}

pub async fn start_web_server(
    config: ServerConfig,
    state: WebState,
) -> std::io::Result<()> {
    let routes = router(state);

    match config.tls_mode {
        TlsMode::None => serve_plain(config.port, routes).await,
        mode => {
            let tls_config = match mode {
                TlsMode::Openssl => tls::openssl_config().await,
                TlsMode::Generated => tls::generated_config().await,
                TlsMode::None => unreachable!(),
            };

            match tls_config {
                Ok(tls_config) => {
                    let addr = SocketAddr::from(([0, 0, 0, 0], config.https_port));
                    log_startup("https", config.https_port);
                    axum_server::bind_rustls(addr, tls_config)
                        .serve(routes.into_make_service())
                        .await
                }
                Err(why) => {
                    log::error!("TLS setup failed, falling back to HTTP: {}", why);
                    serve_plain(config.port, routes).await
                }
            }
        }
    }
}

async fn serve_plain(port: u16, routes: Router) -> std::io::Result<()> {
    let listener = TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    log_startup("http", port);
    axum::serve(listener, routes.into_make_service()).await
}

fn log_startup(scheme: &str, port: u16) {
    log::info!("Server running on {}://localhost:{}", scheme, port);
    log::info!("Nurse interface: {}://localhost:{}/nurse", scheme, port);
    log::info!(
        "Supervisor interface: {}://localhost:{}/supervisor",
        scheme,
        port
    );
}

fn static_content_router() -> Router {
    Router::new()
        .route_service(
            "/nurse",
            get_service(ServeFile::new(format!("{PUBLIC_DIR}nurse.html"))),
        )
        .route_service(
            "/supervisor",
            get_service(ServeFile::new(format!("{PUBLIC_DIR}supervisor.html"))),
        )
        .nest_service(
            "/",
            get_service(
                ServeDir::new(PUBLIC_DIR)
                    .not_found_service(on(METHOD_FILTER_ALL, route_not_found)),
            ),
        )
}
