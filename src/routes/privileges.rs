use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::backend::Backend;
use crate::domain::privilege::PrivilegeType;
use crate::dto::ListQuery;
use crate::forms::privileges::{CreatePrivilegeForm, GrantPrivilegeForm};
use crate::routes::{base_context, finish_action, render_error_page, render_template};
use crate::services::privileges as privileges_service;

#[get("/privileges")]
pub async fn show_privileges(
    params: web::Query<ListQuery>,
    backend: web::Data<dyn Backend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match privileges_service::list_privileges(backend.get_ref(), &params).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "privileges");
            context.insert("privileges", &data.privileges);
            context.insert("usernames", &data.usernames);
            render_template(&tera, "privileges/index.html", &context)
        }
        Err(err) => render_error_page(
            &tera,
            &flash_messages,
            "privileges",
            "Failed to load privileges",
            &err,
        ),
    }
}

#[post("/privileges/add")]
pub async fn add_privilege(
    backend: web::Data<dyn Backend>,
    web::Form(form): web::Form<CreatePrivilegeForm>,
) -> impl Responder {
    let result = privileges_service::create_privilege(backend.get_ref(), form).await;
    finish_action(
        result,
        |()| "Privilege created.".to_string(),
        "Failed to create privilege",
        "/privileges",
    )
}

#[post("/privileges/grant")]
pub async fn grant_privilege(
    backend: web::Data<dyn Backend>,
    web::Form(form): web::Form<GrantPrivilegeForm>,
) -> impl Responder {
    let result = privileges_service::grant_privilege(backend.get_ref(), form).await;
    finish_action(
        result,
        |grant| {
            let kind = match grant.privilege_type() {
                PrivilegeType::System => "System",
                PrivilegeType::Object => "Object",
            };
            format!("{kind} privilege granted.")
        },
        "Failed to grant privilege",
        "/privileges",
    )
}

#[get("/privileges/{name}")]
pub async fn show_privilege(
    name: web::Path<String>,
    backend: web::Data<dyn Backend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match privileges_service::load_privilege(backend.get_ref(), &name).await {
        Ok(privilege) => {
            let mut context = base_context(&flash_messages, "privileges");
            context.insert("privilege", &privilege);
            render_template(&tera, "privileges/show.html", &context)
        }
        Err(err) => render_error_page(
            &tera,
            &flash_messages,
            "privileges",
            "Failed to load privilege",
            &err,
        ),
    }
}

#[post("/privileges/{name}/delete")]
pub async fn delete_privilege(
    name: web::Path<String>,
    backend: web::Data<dyn Backend>,
) -> impl Responder {
    let result = privileges_service::delete_privilege(backend.get_ref(), &name).await;
    finish_action(
        result,
        |()| format!("Privilege {name} deleted."),
        "Failed to delete privilege",
        "/privileges",
    )
}
