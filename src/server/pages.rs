use actix_web::HttpResponse;
use actix_web::Responder;

const INDEX: &str = include_str!("../../templates/index.html");
const HOME: &str = include_str!("../../templates/home.html");
const SIGN_TO_SPEECH: &str = include_str!("../../templates/sign_to_speech.html");
const SPEECH_TO_SIGN: &str = include_str!("../../templates/speech_to_sign.html");
const ABOUT: &str = include_str!("../../templates/about.html");

fn html(page: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page)
}

pub async fn index() -> impl Responder {
    html(INDEX)
}
pub async fn home() -> impl Responder {
    html(HOME)
}
pub async fn sign_to_speech() -> impl Responder {
    html(SIGN_TO_SPEECH)
}
pub async fn speech_to_sign() -> impl Responder {
    html(SPEECH_TO_SIGN)
}
pub async fn about() -> impl Responder {
    html(ABOUT)
}
