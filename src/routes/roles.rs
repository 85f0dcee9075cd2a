use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::backend::Backend;
use crate::dto::ListQuery;
use crate::routes::{
    base_context, console_path, finish_action, render_error_page, render_template,
};
use crate::services::roles as roles_service;

#[get("/roles")]
pub async fn show_roles(
    params: web::Query<ListQuery>,
    backend: web::Data<dyn Backend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match roles_service::list_roles(backend.get_ref(), &params).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "roles");
            context.insert("roles", &data.roles);
            context.insert("privileges", &data.privileges);
            render_template(&tera, "roles/index.html", &context)
        }
        Err(err) => render_error_page(&tera, &flash_messages, "roles", "Failed to load roles", &err),
    }
}

#[post("/roles/add")]
pub async fn add_role(backend: web::Data<dyn Backend>, form: web::Bytes) -> impl Responder {
    let result = roles_service::create_role(backend.get_ref(), form.as_ref()).await;
    finish_action(
        result,
        |name| format!("Role {name} created."),
        "Failed to create role",
        "/roles",
    )
}

#[get("/roles/{name}")]
pub async fn show_role(
    name: web::Path<String>,
    params: web::Query<ListQuery>,
    backend: web::Data<dyn Backend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match roles_service::load_role(backend.get_ref(), &name, &params).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "roles");
            context.insert("role", &data.role);
            context.insert("privileges", &data.privileges);
            render_template(&tera, "roles/show.html", &context)
        }
        Err(err) => render_error_page(&tera, &flash_messages, "roles", "Failed to load role", &err),
    }
}

#[post("/roles/{name}/delete")]
pub async fn delete_role(name: web::Path<String>, backend: web::Data<dyn Backend>) -> impl Responder {
    let result = roles_service::delete_role(backend.get_ref(), &name).await;
    finish_action(
        result,
        |()| format!("Role {name} deleted."),
        "Failed to delete role",
        "/roles",
    )
}

#[post("/roles/{name}/privileges/grant")]
pub async fn grant_privileges(
    name: web::Path<String>,
    backend: web::Data<dyn Backend>,
    form: web::Bytes,
) -> impl Responder {
    let result = roles_service::grant_privileges(backend.get_ref(), &name, form.as_ref()).await;
    finish_action(
        result,
        |count| format!("Granted {count} privilege(s)."),
        "Failed to grant privileges",
        &console_path(&["roles", name.as_str()]),
    )
}

#[post("/roles/{name}/privileges/{privilege}/revoke")]
pub async fn revoke_privilege(
    path: web::Path<(String, String)>,
    backend: web::Data<dyn Backend>,
) -> impl Responder {
    let (name, privilege) = path.into_inner();
    let result = roles_service::revoke_privilege(backend.get_ref(), &name, &privilege).await;
    finish_action(
        result,
        |()| format!("Privilege {privilege} revoked."),
        "Failed to revoke privilege",
        &console_path(&["roles", name.as_str()]),
    )
}
