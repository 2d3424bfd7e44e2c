use super::handlers;
use super::pages;
use crate::gesture::Models;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    /// Serves `models` on `0.0.0.0:port` until the process exits.
    pub async fn run(models: Models, port: u16) -> Result<(), std::io::Error> {
        let models = web::Data::new(models);
        log::info!("{:<32}{:<32}", "starting    server", format!("0.0.0.0:{}", port));
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(models.clone())
                .configure(routes)
        })
        .workers(num_cpus::get())
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

/// Every route the service exposes, plus the lenient JSON extractor config.
#[rustfmt::skip]
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(handlers::json())
        .route("/",               web::get().to(pages::index))
        .route("/home",           web::get().to(pages::home))
        .route("/sign-to-speech", web::get().to(pages::sign_to_speech))
        .route("/speech-to-sign", web::get().to(pages::speech_to_sign))
        .route("/about",          web::get().to(pages::about))
        .route("/predict",        web::post().to(handlers::predict))
        .route("/health",         web::get().to(handlers::health));
}
