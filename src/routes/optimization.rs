use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::backend::Backend;
use crate::dto::ListQuery;
use crate::forms::optimization::{GatherStatsForm, ScheduleStatsForm};
use crate::routes::{base_context, finish_action, render_error_page, render_template};
use crate::services::optimization as optimization_service;

#[get("/optimisation")]
pub async fn show_optimisation(
    params: web::Query<ListQuery>,
    backend: web::Data<dyn Backend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match optimization_service::list_slow_queries(backend.get_ref(), &params).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "optimisation");
            context.insert("slow_queries", &data.slow_queries);
            render_template(&tera, "optimisation/index.html", &context)
        }
        Err(err) => render_error_page(
            &tera,
            &flash_messages,
            "optimisation",
            "Failed to load slow queries",
            &err,
        ),
    }
}

#[get("/optimisation/tuning/{query_id}")]
pub async fn show_tuning(
    query_id: web::Path<i64>,
    backend: web::Data<dyn Backend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match optimization_service::tuning_recommendation(backend.get_ref(), query_id.into_inner()).await
    {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "optimisation");
            context.insert("query_id", &data.query_id);
            context.insert("recommendation", &data.recommendation);
            render_template(&tera, "optimisation/tuning.html", &context)
        }
        Err(err) => render_error_page(
            &tera,
            &flash_messages,
            "optimisation",
            "Failed to get tuning recommendation",
            &err,
        ),
    }
}

#[post("/optimisation/gather-stats")]
pub async fn gather_stats(
    backend: web::Data<dyn Backend>,
    web::Form(form): web::Form<GatherStatsForm>,
) -> impl Responder {
    let result = optimization_service::gather_table_stats(backend.get_ref(), form).await;
    finish_action(
        result,
        |(schema, table)| format!("Statistics gathered for {schema}.{table}."),
        "Failed to gather statistics",
        "/optimisation",
    )
}

#[post("/optimisation/schedule-stats")]
pub async fn schedule_stats(
    backend: web::Data<dyn Backend>,
    web::Form(form): web::Form<ScheduleStatsForm>,
) -> impl Responder {
    let result = optimization_service::schedule_stats_gathering(backend.get_ref(), form).await;
    finish_action(
        result,
        |schema| format!("Statistics gathering scheduled for {schema}."),
        "Failed to schedule statistics gathering",
        "/optimisation",
    )
}
