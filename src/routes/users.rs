use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::backend::Backend;
use crate::dto::ListQuery;
use crate::forms::users::{
    CreateUserForm, DEFAULT_TABLESPACE, DEFAULT_TEMPORARY_TABLESPACE, EditUserForm,
};
use crate::routes::{
    base_context, console_path, finish_action, render_error_page, render_template,
};
use crate::services::users as users_service;

#[get("/users")]
pub async fn show_users(
    params: web::Query<ListQuery>,
    backend: web::Data<dyn Backend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match users_service::list_users(backend.get_ref(), &params).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "users");
            context.insert("users", &data.users);
            context.insert("default_tablespace", DEFAULT_TABLESPACE);
            context.insert("temporary_tablespace", DEFAULT_TEMPORARY_TABLESPACE);
            render_template(&tera, "users/index.html", &context)
        }
        Err(err) => render_error_page(&tera, &flash_messages, "users", "Failed to load users", &err),
    }
}

#[post("/users/add")]
pub async fn add_user(
    backend: web::Data<dyn Backend>,
    web::Form(form): web::Form<CreateUserForm>,
) -> impl Responder {
    let result = users_service::create_user(backend.get_ref(), form).await;
    finish_action(
        result,
        |username| format!("User {username} created."),
        "Failed to create user",
        "/users",
    )
}

#[get("/users/{username}")]
pub async fn show_user(
    username: web::Path<String>,
    params: web::Query<ListQuery>,
    backend: web::Data<dyn Backend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match users_service::load_user(backend.get_ref(), &username, &params).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "users");
            context.insert("user", &data.user);
            context.insert("roles", &data.roles);
            render_template(&tera, "users/edit.html", &context)
        }
        Err(err) => render_error_page(&tera, &flash_messages, "users", "Failed to load user", &err),
    }
}

#[post("/users/{username}/save")]
pub async fn save_user(
    username: web::Path<String>,
    backend: web::Data<dyn Backend>,
    web::Form(form): web::Form<EditUserForm>,
) -> impl Responder {
    let result = users_service::update_user(backend.get_ref(), &username, form).await;
    finish_action(
        result,
        |()| "User updated.".to_string(),
        "Failed to update user",
        &console_path(&["users", username.as_str()]),
    )
}

#[post("/users/{username}/lock")]
pub async fn lock_user(
    username: web::Path<String>,
    backend: web::Data<dyn Backend>,
) -> impl Responder {
    let result = users_service::lock_user(backend.get_ref(), &username).await;
    finish_action(
        result,
        |()| format!("User {username} locked."),
        "Failed to lock user",
        "/users",
    )
}

#[post("/users/{username}/unlock")]
pub async fn unlock_user(
    username: web::Path<String>,
    backend: web::Data<dyn Backend>,
) -> impl Responder {
    let result = users_service::unlock_user(backend.get_ref(), &username).await;
    finish_action(
        result,
        |()| format!("User {username} unlocked."),
        "Failed to unlock user",
        "/users",
    )
}

#[post("/users/{username}/delete")]
pub async fn delete_user(
    username: web::Path<String>,
    backend: web::Data<dyn Backend>,
) -> impl Responder {
    let result = users_service::delete_user(backend.get_ref(), &username).await;
    finish_action(
        result,
        |()| format!("User {username} deleted."),
        "Failed to delete user",
        "/users",
    )
}

#[post("/users/{username}/roles/grant")]
pub async fn grant_roles(
    username: web::Path<String>,
    backend: web::Data<dyn Backend>,
    form: web::Bytes,
) -> impl Responder {
    let result = users_service::grant_roles(backend.get_ref(), &username, form.as_ref()).await;
    finish_action(
        result,
        |count| format!("Granted {count} role(s)."),
        "Failed to grant roles",
        &console_path(&["users", username.as_str()]),
    )
}

#[post("/users/{username}/roles/{role}/revoke")]
pub async fn revoke_role(
    path: web::Path<(String, String)>,
    backend: web::Data<dyn Backend>,
) -> impl Responder {
    let (username, role) = path.into_inner();
    let result = users_service::revoke_role(backend.get_ref(), &username, &role).await;
    finish_action(
        result,
        |()| format!("Role {role} revoked."),
        "Failed to revoke role",
        &console_path(&["users", username.as_str()]),
    )
}
