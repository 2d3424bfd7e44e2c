use crate::dto::PredictRequest;
use crate::dto::PredictResponse;
use crate::gesture::Models;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::error::InternalError;
use actix_web::web;

/// JSON extraction that never fails the request: a body that cannot be
/// read as [`PredictRequest`] is answered with the null prediction.
pub fn json() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _| {
        log::warn!("unreadable predict body: {}", err);
        InternalError::from_response(err, HttpResponse::Ok().json(PredictResponse::null())).into()
    })
}

pub async fn predict(models: web::Data<Models>, req: web::Json<PredictRequest>) -> impl Responder {
    let req = req.into_inner();
    let response = models
        .dispatch(req.landmarks.as_deref(), req.hand_count, req.is_motion)
        .inspect(|prediction| {
            if prediction.is_null() {
                log::debug!("no prediction for {}-hand request", req.hand_count);
            }
        })
        .map(PredictResponse::from)
        .unwrap_or_else(|rejection| {
            log::warn!(
                "rejected {}-hand {} request: {}",
                req.hand_count,
                if req.is_motion { "motion" } else { "static" },
                rejection
            );
            PredictResponse::null()
        });
    HttpResponse::Ok().json(response)
}

pub async fn health(models: web::Data<Models>) -> impl Responder {
    let mut body = String::from("ok\n");
    for line in models.summary() {
        body.push_str(&line);
        body.push('\n');
    }
    HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(body)
}
