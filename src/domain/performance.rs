use serde::{Deserialize, Serialize};

use crate::domain::types::BackendTimestamp;
use crate::pagination::Searchable;

/// Instance-wide gauges sampled by the backend on demand.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct PerformanceMetrics {
    pub cpu_usage_percent: f64,
    #[serde(rename(deserialize = "memoryUsageMB"))]
    pub memory_usage_mb: f64,
    #[serde(rename(deserialize = "pgaUsageMB"))]
    pub pga_usage_mb: f64,
    pub buffer_cache_hit_ratio: f64,
    pub io_operations_per_second: f64,
    pub timestamp: BackendTimestamp,
}

/// AWR snapshot summary row.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "SCREAMING_SNAKE_CASE"))]
pub struct AwrSnapshot {
    pub snap_id: i64,
    pub begin_interval_time: BackendTimestamp,
    pub end_interval_time: BackendTimestamp,
    pub cpu_usage_percent: f64,
    pub memory_usage_mb: f64,
    pub io_requests_per_sec: f64,
}

/// Active session history sample.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "SCREAMING_SNAKE_CASE"))]
pub struct AshSample {
    pub session_id: i64,
    #[serde(default)]
    pub sql_id: Option<String>,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub wait_class: Option<String>,
    pub session_state: String,
    pub time_waited: f64,
}

impl Searchable for AwrSnapshot {
    fn search_values(&self) -> Vec<String> {
        vec![
            self.snap_id.to_string(),
            self.begin_interval_time.to_string(),
            self.end_interval_time.to_string(),
            self.cpu_usage_percent.to_string(),
            self.memory_usage_mb.to_string(),
            self.io_requests_per_sec.to_string(),
        ]
    }
}

impl Searchable for AshSample {
    fn search_values(&self) -> Vec<String> {
        let mut values = vec![self.session_id.to_string()];
        values.extend(
            [&self.sql_id, &self.event, &self.wait_class]
                .into_iter()
                .flatten()
                .cloned(),
        );
        values.push(self.session_state.clone());
        values.push(self.time_waited.to_string());
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_metrics() {
        let metrics: PerformanceMetrics = serde_json::from_str(
            r#"{
                "cpuUsagePercent": 12.5,
                "memoryUsageMB": 2048.0,
                "pgaUsageMB": 512.25,
                "bufferCacheHitRatio": 99.1,
                "ioOperationsPerSecond": 340.0,
                "timestamp": "2024-12-31T10:15:00"
            }"#,
        )
        .unwrap();
        assert_eq!(metrics.memory_usage_mb, 2048.0);
        assert_eq!(metrics.pga_usage_mb, 512.25);
    }

    #[test]
    fn deserializes_awr_and_ash_rows() {
        let awr: AwrSnapshot = serde_json::from_str(
            r#"{
                "SNAP_ID": 101,
                "BEGIN_INTERVAL_TIME": "2024-12-31T00:00:00",
                "END_INTERVAL_TIME": "2024-12-31T01:00:00",
                "CPU_USAGE_PERCENT": 40.0,
                "MEMORY_USAGE_MB": 1024.0,
                "IO_REQUESTS_PER_SEC": 12.0
            }"#,
        )
        .unwrap();
        assert_eq!(awr.snap_id, 101);

        let ash: AshSample = serde_json::from_str(
            r#"{
                "SESSION_ID": 7,
                "SQL_ID": "4ztz048yfq32s",
                "EVENT": null,
                "WAIT_CLASS": "User I/O",
                "SESSION_STATE": "WAITING",
                "TIME_WAITED": 1500
            }"#,
        )
        .unwrap();
        assert!(ash.matches("user i/o"));
        assert!(ash.event.is_none());
    }
}
