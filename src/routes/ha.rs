use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use chrono::Local;
use tera::Tera;

use crate::backend::Backend;
use crate::forms::ha::{DEFAULT_LISTENER_PORT, DataGuardConfigForm};
use crate::routes::{base_context, finish_action, render_template};
use crate::services::ha as ha_service;

#[get("/ha")]
pub async fn show_ha(
    backend: web::Data<dyn Backend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let today = Local::now().date_naive();
    let data = ha_service::load_ha(backend.get_ref(), today).await;

    let mut context = base_context(&flash_messages, "ha");
    context.insert("status", &data.status);
    context.insert("report", &data.report);
    context.insert("report_start", &data.report_start);
    context.insert("report_end", &data.report_end);
    context.insert("errors", &data.errors);
    context.insert("default_port", &DEFAULT_LISTENER_PORT);

    render_template(&tera, "ha/index.html", &context)
}

#[post("/ha/configure")]
pub async fn configure_data_guard(
    backend: web::Data<dyn Backend>,
    web::Form(form): web::Form<DataGuardConfigForm>,
) -> impl Responder {
    let result = ha_service::configure_data_guard(backend.get_ref(), form).await;
    finish_action(
        result,
        |()| "Data Guard configured.".to_string(),
        "Failed to configure Data Guard",
        "/ha",
    )
}

#[post("/ha/simulate/{operation}")]
pub async fn simulate(
    operation: web::Path<String>,
    backend: web::Data<dyn Backend>,
) -> impl Responder {
    let result = ha_service::simulate(backend.get_ref(), &operation).await;
    finish_action(
        result,
        |(operation, outcome)| {
            format!(
                "{} simulation completed in {:.2} ms.",
                operation.label(),
                outcome.execution_time
            )
        },
        "Simulation failed",
        "/ha",
    )
}
