//! HTTP handlers and the helpers they share.

use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::{HttpResponse, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages, Level};
use reqwest::Url;
use tera::{Context, Tera};

use crate::services::ServiceError;

pub mod ha;
pub mod main;
pub mod optimization;
pub mod performance;
pub mod privileges;
pub mod rman;
pub mod roles;
pub mod security;
pub mod users;

/// Maps a flash message level to the Bootstrap alert class.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Context shared by every page: pending alerts and the active menu entry.
pub fn base_context(flash_messages: &IncomingFlashMessages, current_page: &str) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    render_with_status(tera, template, context, StatusCode::OK)
}

fn render_with_status(
    tera: &Tera,
    template: &str,
    context: &Context,
    status: StatusCode,
) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Builds a console path from raw segments, percent-encoding each one so
/// names like `C##ADMIN` survive the round trip through `Location`.
pub fn console_path(segments: &[&str]) -> String {
    let Ok(mut url) = Url::parse("http://localhost/") else {
        return format!("/{}", segments.join("/"));
    };
    if let Ok(mut path) = url.path_segments_mut() {
        path.clear().extend(segments);
    }
    url.path().to_string()
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Renders the error page in place of a page whose data could not be loaded.
pub fn render_error_page(
    tera: &Tera,
    flash_messages: &IncomingFlashMessages,
    current_page: &str,
    summary: &str,
    err: &ServiceError,
) -> HttpResponse {
    let status = match err {
        ServiceError::NotFound => StatusCode::NOT_FOUND,
        ServiceError::Form(_) | ServiceError::TypeConstraint(_) => StatusCode::BAD_REQUEST,
        ServiceError::Backend(_) => StatusCode::BAD_GATEWAY,
    };
    let message = match err {
        ServiceError::NotFound => format!("{summary}: not found"),
        _ => err.user_message(summary),
    };

    let mut context = base_context(flash_messages, current_page);
    context.insert("message", &message);

    render_with_status(tera, "main/error.html", &context, status)
}

/// Flashes the outcome of a mutating action and redirects back to `location`.
pub fn finish_action<T>(
    result: Result<T, ServiceError>,
    success: impl FnOnce(T) -> String,
    failure: &str,
    location: &str,
) -> HttpResponse {
    match result {
        Ok(value) => FlashMessage::success(success(value)).send(),
        Err(ServiceError::NotFound) => FlashMessage::error(format!("{failure}: not found")).send(),
        Err(err) => FlashMessage::error(err.user_message(failure)).send(),
    }
    redirect(location)
}

/// Registers every console route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(main::dashboard)
        .service(users::show_users)
        .service(users::add_user)
        .service(users::show_user)
        .service(users::save_user)
        .service(users::lock_user)
        .service(users::unlock_user)
        .service(users::delete_user)
        .service(users::grant_roles)
        .service(users::revoke_role)
        .service(roles::show_roles)
        .service(roles::add_role)
        .service(roles::show_role)
        .service(roles::delete_role)
        .service(roles::grant_privileges)
        .service(roles::revoke_privilege)
        .service(privileges::show_privileges)
        .service(privileges::add_privilege)
        .service(privileges::grant_privilege)
        .service(privileges::show_privilege)
        .service(privileges::delete_privilege)
        .service(rman::show_rman)
        .service(rman::full_backup)
        .service(rman::incremental_backup)
        .service(rman::restore)
        .service(performance::metrics)
        .service(performance::show_performance)
        .service(optimization::show_optimisation)
        .service(optimization::show_tuning)
        .service(optimization::gather_stats)
        .service(optimization::schedule_stats)
        .service(ha::show_ha)
        .service(ha::configure_data_guard)
        .service(ha::simulate)
        .service(security::security_index)
        .service(security::show_tde)
        .service(security::enable_tde)
        .service(security::disable_tde)
        .service(security::show_vpd)
        .service(security::add_vpd_policy)
        .service(security::delete_vpd_policy)
        .service(security::show_audit)
        .service(security::enable_audit)
        .service(security::disable_audit);
}
