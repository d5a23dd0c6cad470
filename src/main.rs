use crate::app::App;
use crate::config::Config;
use crate::router::handle;
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod domain;
mod errors;
mod ingest;
mod lottery;
mod relay;
mod responses;
mod router;
mod templates;


fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "comment_lottery=info".into()),
        )
        .init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration failed: {e}");
            std::process::exit(1);
        }
    };

    let app = match App::new(&config) {
        Ok(app) => app,
        Err(e) => {
            error!("Startup failed: {e}");
            std::process::exit(1);
        }
    };

    info!("Starting server at http://{}", config.addr);

    let server = Server::bind(&config.addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
