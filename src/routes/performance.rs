use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use serde_json::json;
use tera::Tera;

use crate::backend::Backend;
use crate::forms::performance::PerformanceQuery;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, render_template};
use crate::services::performance as performance_service;

#[get("/performance")]
pub async fn show_performance(
    params: web::Query<PerformanceQuery>,
    backend: web::Data<dyn Backend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let data = performance_service::load_performance(backend.get_ref(), &params).await;

    let mut context = base_context(&flash_messages, "performance");
    context.insert("metrics", &data.metrics);
    context.insert("awr", &data.awr);
    context.insert("awr_chart", &data.awr_chart);
    context.insert("ash", &data.ash);
    context.insert("errors", &data.errors);
    context.insert("start", &params.start);
    context.insert("end", &params.end);
    context.insert("window_query", &params.window_query());
    context.insert(
        "poll_interval_ms",
        &server_config.metrics_poll_interval_secs.saturating_mul(1000),
    );

    render_template(&tera, "performance/index.html", &context)
}

/// Latest metrics sample for the live dashboard.
#[get("/performance/metrics")]
pub async fn metrics(backend: web::Data<dyn Backend>) -> impl Responder {
    match performance_service::real_time_metrics(backend.get_ref()).await {
        Ok(metrics) => HttpResponse::Ok().json(metrics),
        Err(err) => HttpResponse::BadGateway()
            .json(json!({ "error": err.user_message("Failed to load metrics") })),
    }
}
