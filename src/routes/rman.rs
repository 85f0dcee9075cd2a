use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::backend::Backend;
use crate::dto::ListQuery;
use crate::forms::rman::IncrementalBackupForm;
use crate::routes::{base_context, finish_action, render_error_page, render_template};
use crate::services::rman as rman_service;

#[get("/rman")]
pub async fn show_rman(
    params: web::Query<ListQuery>,
    backend: web::Data<dyn Backend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match rman_service::list_backups(backend.get_ref(), &params).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "rman");
            context.insert("backups", &data.backups);
            render_template(&tera, "rman/index.html", &context)
        }
        Err(err) => render_error_page(
            &tera,
            &flash_messages,
            "rman",
            "Failed to load backup history",
            &err,
        ),
    }
}

#[post("/rman/backup/full")]
pub async fn full_backup(backend: web::Data<dyn Backend>) -> impl Responder {
    let result = rman_service::full_backup(backend.get_ref()).await;
    finish_action(
        result,
        |()| "Full backup started.".to_string(),
        "Failed to start full backup",
        "/rman",
    )
}

#[post("/rman/backup/incremental")]
pub async fn incremental_backup(
    backend: web::Data<dyn Backend>,
    web::Form(form): web::Form<IncrementalBackupForm>,
) -> impl Responder {
    let result = rman_service::incremental_backup(backend.get_ref(), form).await;
    finish_action(
        result,
        |level| format!("Incremental level {level} backup started."),
        "Failed to start incremental backup",
        "/rman",
    )
}

#[post("/rman/restore")]
pub async fn restore(backend: web::Data<dyn Backend>) -> impl Responder {
    let result = rman_service::restore(backend.get_ref()).await;
    finish_action(
        result,
        |()| "Restore started.".to_string(),
        "Failed to start restore",
        "/rman",
    )
}
