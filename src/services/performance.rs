//! Services backing the performance dashboard.

use crate::backend::PerformanceReader;
use crate::domain::performance::PerformanceMetrics;
use crate::dto::performance::{PerformancePageData, awr_chart};
use crate::forms::performance::PerformanceQuery;
use crate::pagination::Paginated;
use crate::services::ServiceResult;

/// Loads every section of the page independently so that one failing
/// report leaves the others visible.
pub async fn load_performance<B>(backend: &B, query: &PerformanceQuery) -> PerformancePageData
where
    B: PerformanceReader + ?Sized,
{
    let mut errors = Vec::new();

    let metrics = match backend.real_time_metrics().await {
        Ok(metrics) => Some(metrics),
        Err(err) => {
            log::error!("Failed to load real-time metrics: {err}");
            errors.push("Failed to load real-time metrics.".to_string());
            None
        }
    };

    let awr = match query.awr_range() {
        Ok(Some(range)) => match backend.awr_report(&range).await {
            Ok(snapshots) => Some(snapshots),
            Err(err) => {
                log::error!("Failed to load AWR report: {err}");
                errors.push("Failed to load AWR report.".to_string());
                None
            }
        },
        Ok(None) => None,
        Err(err) => {
            errors.push(err.to_string());
            None
        }
    };

    let ash = match backend.ash_report().await {
        Ok(samples) => samples,
        Err(err) => {
            log::error!("Failed to load ASH report: {err}");
            errors.push("Failed to load ASH report.".to_string());
            Vec::new()
        }
    };

    PerformancePageData {
        awr_chart: awr.as_deref().map(awr_chart).unwrap_or_default(),
        awr,
        metrics,
        ash: Paginated::new(ash, query.search.as_deref(), query.page),
        errors,
    }
}

/// Latest gauges for the browser polling loop.
pub async fn real_time_metrics<B>(backend: &B) -> ServiceResult<PerformanceMetrics>
where
    B: PerformanceReader + ?Sized,
{
    Ok(backend.real_time_metrics().await.map_err(|err| {
        log::error!("Failed to load real-time metrics: {err}");
        err
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::errors::BackendError;
    use crate::backend::mock::MockBackend;
    use crate::domain::performance::{AshSample, AwrSnapshot};

    fn ash(session_id: i64, wait_class: &str) -> AshSample {
        AshSample {
            session_id,
            sql_id: None,
            event: None,
            wait_class: Some(wait_class.to_string()),
            session_state: "WAITING".to_string(),
            time_waited: 10.0,
        }
    }

    #[tokio::test]
    async fn awr_is_skipped_without_window() {
        let mut backend = MockBackend::new();
        backend
            .expect_real_time_metrics()
            .returning(|| Err(BackendError::Network("timeout".into())));
        backend.expect_awr_report().times(0);
        backend
            .expect_ash_report()
            .returning(|| Ok(vec![ash(1, "User I/O"), ash(2, "Commit")]));

        let query = PerformanceQuery {
            search: Some("commit".to_string()),
            ..PerformanceQuery::default()
        };
        let data = load_performance(&backend, &query).await;

        assert!(data.metrics.is_none());
        assert!(data.awr.is_none());
        assert_eq!(data.errors, vec!["Failed to load real-time metrics."]);
        assert_eq!(data.ash.total_items, 1);
        assert_eq!(data.ash.items[0].session_id, 2);
    }

    #[tokio::test]
    async fn awr_report_uses_requested_window() {
        let mut backend = MockBackend::new();
        backend.expect_real_time_metrics().returning(|| {
            Ok(serde_json::from_value(serde_json::json!({
                "cpuUsagePercent": 10.0,
                "memoryUsageMB": 100.0,
                "pgaUsageMB": 10.0,
                "bufferCacheHitRatio": 99.0,
                "ioOperationsPerSecond": 5.0,
                "timestamp": "2024-12-31T10:00:00"
            }))
            .unwrap())
        });
        backend
            .expect_awr_report()
            .withf(|range| {
                range.start().to_string() == "2024-12-30 00:00:00"
                    && range.end().to_string() == "2024-12-31 23:59:59"
            })
            .returning(|_| {
                Ok(vec![serde_json::from_value::<AwrSnapshot>(serde_json::json!({
                    "SNAP_ID": 7,
                    "BEGIN_INTERVAL_TIME": "2024-12-30T00:00:00",
                    "END_INTERVAL_TIME": "2024-12-30T01:00:00",
                    "CPU_USAGE_PERCENT": 35.0,
                    "MEMORY_USAGE_MB": 900.0,
                    "IO_REQUESTS_PER_SEC": 4.0
                }))
                .unwrap()])
            });
        backend.expect_ash_report().returning(|| Ok(vec![]));

        let query = PerformanceQuery {
            start: "2024-12-30".to_string(),
            end: "2024-12-31".to_string(),
            ..PerformanceQuery::default()
        };
        let data = load_performance(&backend, &query).await;

        assert!(data.errors.is_empty());
        assert_eq!(data.awr.as_ref().map(Vec::len), Some(1));
        assert_eq!(data.awr_chart[0].cpu_width, 100.0);
    }

    #[tokio::test]
    async fn reversed_window_is_reported() {
        let mut backend = MockBackend::new();
        backend
            .expect_real_time_metrics()
            .returning(|| Err(BackendError::Network("timeout".into())));
        backend.expect_awr_report().times(0);
        backend.expect_ash_report().returning(|| Ok(vec![]));

        let query = PerformanceQuery {
            start: "2024-12-31".to_string(),
            end: "2024-12-01".to_string(),
            ..PerformanceQuery::default()
        };
        let data = load_performance(&backend, &query).await;

        assert_eq!(data.errors.len(), 2);
        assert!(data.awr_chart.is_empty());
    }
}
