use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::backend::Backend;
use crate::domain::security::{AuditLevel, EncryptionAlgorithm};
use crate::dto::ListQuery;
use crate::forms::security::{
    CreateVpdPolicyForm, DEFAULT_STATEMENT_TYPES, DisableAuditForm, DisableTdeForm,
    EnableAuditForm, EnableTdeForm,
};
use crate::routes::{base_context, finish_action, redirect, render_error_page, render_template};
use crate::services::security as security_service;

#[get("/security")]
pub async fn security_index() -> impl Responder {
    redirect("/security/tde")
}

#[get("/security/tde")]
pub async fn show_tde(
    params: web::Query<ListQuery>,
    backend: web::Data<dyn Backend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match security_service::list_tde(backend.get_ref(), &params).await {
        Ok(data) => {
            let algorithms = EncryptionAlgorithm::ALL.map(EncryptionAlgorithm::as_str);
            let mut context = base_context(&flash_messages, "security");
            context.insert("configurations", &data.configurations);
            context.insert("algorithms", &algorithms);
            context.insert("default_algorithm", EncryptionAlgorithm::default().as_str());
            render_template(&tera, "security/tde.html", &context)
        }
        Err(err) => render_error_page(
            &tera,
            &flash_messages,
            "security",
            "Failed to load TDE configurations",
            &err,
        ),
    }
}

#[post("/security/tde/enable")]
pub async fn enable_tde(
    backend: web::Data<dyn Backend>,
    web::Form(form): web::Form<EnableTdeForm>,
) -> impl Responder {
    let result = security_service::enable_tde(backend.get_ref(), form).await;
    finish_action(
        result,
        |config| {
            format!(
                "Encryption enabled for {}.{}.",
                config.table_name, config.column_name
            )
        },
        "Failed to enable encryption",
        "/security/tde",
    )
}

#[post("/security/tde/disable")]
pub async fn disable_tde(
    backend: web::Data<dyn Backend>,
    web::Form(form): web::Form<DisableTdeForm>,
) -> impl Responder {
    let result = security_service::disable_tde(backend.get_ref(), form).await;
    finish_action(
        result,
        |column| {
            format!(
                "Encryption disabled for {}.{}.",
                column.table_name, column.column_name
            )
        },
        "Failed to disable encryption",
        "/security/tde",
    )
}

#[get("/security/vpd")]
pub async fn show_vpd(
    params: web::Query<ListQuery>,
    backend: web::Data<dyn Backend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match security_service::list_vpd_policies(backend.get_ref(), &params).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "security");
            context.insert("policies", &data.policies);
            context.insert("default_statement_types", DEFAULT_STATEMENT_TYPES);
            render_template(&tera, "security/vpd.html", &context)
        }
        Err(err) => render_error_page(
            &tera,
            &flash_messages,
            "security",
            "Failed to load VPD policies",
            &err,
        ),
    }
}

#[post("/security/vpd/add")]
pub async fn add_vpd_policy(
    backend: web::Data<dyn Backend>,
    web::Form(form): web::Form<CreateVpdPolicyForm>,
) -> impl Responder {
    let result = security_service::create_vpd_policy(backend.get_ref(), form).await;
    finish_action(
        result,
        |policy| format!("Policy {} created.", policy.policy_name),
        "Failed to create VPD policy",
        "/security/vpd",
    )
}

#[post("/security/vpd/{policy_name}/delete")]
pub async fn delete_vpd_policy(
    policy_name: web::Path<String>,
    backend: web::Data<dyn Backend>,
) -> impl Responder {
    let result = security_service::delete_vpd_policy(backend.get_ref(), &policy_name).await;
    finish_action(
        result,
        |()| format!("Policy {policy_name} deleted."),
        "Failed to delete VPD policy",
        "/security/vpd",
    )
}

#[get("/security/audit")]
pub async fn show_audit(
    params: web::Query<ListQuery>,
    backend: web::Data<dyn Backend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match security_service::list_audit_configurations(backend.get_ref(), &params).await {
        Ok(data) => {
            let levels = AuditLevel::ALL.map(AuditLevel::as_str);
            let mut context = base_context(&flash_messages, "security");
            context.insert("configurations", &data.configurations);
            context.insert("audit_levels", &levels);
            render_template(&tera, "security/audit.html", &context)
        }
        Err(err) => render_error_page(
            &tera,
            &flash_messages,
            "security",
            "Failed to load audit configurations",
            &err,
        ),
    }
}

#[post("/security/audit/enable")]
pub async fn enable_audit(
    backend: web::Data<dyn Backend>,
    web::Form(form): web::Form<EnableAuditForm>,
) -> impl Responder {
    let result = security_service::enable_audit(backend.get_ref(), form).await;
    finish_action(
        result,
        |config| format!("Auditing enabled for {}.", config.table_name),
        "Failed to enable auditing",
        "/security/audit",
    )
}

#[post("/security/audit/disable")]
pub async fn disable_audit(
    backend: web::Data<dyn Backend>,
    web::Form(form): web::Form<DisableAuditForm>,
) -> impl Responder {
    let result = security_service::disable_audit(backend.get_ref(), form).await;
    finish_action(
        result,
        |table| format!("Auditing disabled for {table}."),
        "Failed to disable auditing",
        "/security/audit",
    )
}
