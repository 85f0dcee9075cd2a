use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::backend::Backend;
use crate::routes::{base_context, render_template};
use crate::services::dashboard as dashboard_service;

#[get("/")]
pub async fn dashboard(
    backend: web::Data<dyn Backend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = dashboard_service::load_dashboard(backend.get_ref()).await;

    let mut context = base_context(&flash_messages, "index");
    context.insert("stats", &data.stats);

    render_template(&tera, "main/index.html", &context)
}
