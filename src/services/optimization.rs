//! Services for slow query analysis and optimizer statistics.

use crate::backend::{OptimizationReader, OptimizationWriter};
use crate::domain::types::{SchemaName, TableName};
use crate::dto::ListQuery;
use crate::dto::optimization::{OptimizationPageData, TuningPageData};
use crate::forms::optimization::{GatherStatsForm, ScheduleStatsForm};
use crate::services::ServiceResult;

/// Loads slow queries with their per-second figures, slowest first.
pub async fn list_slow_queries<B>(backend: &B, query: &ListQuery) -> ServiceResult<OptimizationPageData>
where
    B: OptimizationReader + ?Sized,
{
    let mut slow_queries: Vec<_> = backend
        .slow_queries()
        .await
        .map_err(|err| {
            log::error!("Failed to list slow queries: {err}");
            err
        })?
        .into_iter()
        .map(|q| q.with_derived_times())
        .collect();
    slow_queries.sort_by(|a, b| b.elapsed_time.total_cmp(&a.elapsed_time));

    Ok(OptimizationPageData {
        slow_queries: query.paginate(slow_queries),
    })
}

pub async fn tuning_recommendation<B>(backend: &B, query_id: i64) -> ServiceResult<TuningPageData>
where
    B: OptimizationReader + ?Sized,
{
    let recommendation = backend
        .tuning_recommendation(query_id)
        .await
        .map_err(|err| {
            log::error!("Failed to get tuning recommendation for query {query_id}: {err}");
            err
        })?;

    Ok(TuningPageData {
        query_id,
        recommendation: recommendation.trim().to_string(),
    })
}

pub async fn gather_table_stats<B>(
    backend: &B,
    form: GatherStatsForm,
) -> ServiceResult<(SchemaName, TableName)>
where
    B: OptimizationWriter + ?Sized,
{
    let (schema, table) = form.into_names()?;

    backend
        .gather_table_stats(&schema, &table)
        .await
        .map_err(|err| {
            log::error!("Failed to gather statistics for {schema}.{table}: {err}");
            err
        })?;

    log::info!("Gathered statistics for {schema}.{table}");
    Ok((schema, table))
}

pub async fn schedule_stats_gathering<B>(backend: &B, form: ScheduleStatsForm) -> ServiceResult<SchemaName>
where
    B: OptimizationWriter + ?Sized,
{
    let schema = SchemaName::try_from(form)?;

    backend
        .schedule_stats_gathering(&schema)
        .await
        .map_err(|err| {
            log::error!("Failed to schedule statistics gathering for {schema}: {err}");
            err
        })?;

    Ok(schema)
}
