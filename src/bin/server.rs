//! Prediction Server Binary
//!
//! Loads the three forest artifacts and serves the web pages and
//! `/predict` over HTTP.
//!
//! Options: --port (PORT), --models (MODELS_DIR)

use clap::Parser;
use handsign::gesture::Models;
use handsign::server::Args;
use handsign::server::Server;
use handsign::*;

#[tokio::main]
async fn main() {
    log();
    kys();
    let args = Args::parse();
    let models = match Models::load(&args.models) {
        Ok(models) => models,
        Err(e) => {
            log::error!("cannot load models from {}: {}", args.models.display(), e);
            std::process::exit(1);
        }
    };
    for line in models.summary() {
        log::info!("{}", line);
    }
    if let Err(e) = Server::run(models, args.port).await {
        log::error!("server stopped: {}", e);
        std::process::exit(1);
    }
}
