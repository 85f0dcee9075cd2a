//! DTOs shaped for the performance dashboard.

use serde::Serialize;

use crate::domain::performance::{AshSample, AwrSnapshot, PerformanceMetrics};
use crate::pagination::Paginated;

/// One AWR snapshot rendered as three horizontal bars, each scaled against
/// the largest value of its series.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AwrBar {
    pub label: String,
    pub cpu_usage_percent: f64,
    pub memory_usage_mb: f64,
    pub io_requests_per_sec: f64,
    pub cpu_width: f64,
    pub memory_width: f64,
    pub io_width: f64,
}

fn width(value: f64, max: f64) -> f64 {
    if max > 0.0 {
        (value / max * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Bar chart series built from an AWR report.
pub fn awr_chart(snapshots: &[AwrSnapshot]) -> Vec<AwrBar> {
    let max_of = |f: fn(&AwrSnapshot) -> f64| snapshots.iter().map(f).fold(0.0_f64, f64::max);
    let max_cpu = max_of(|s| s.cpu_usage_percent);
    let max_memory = max_of(|s| s.memory_usage_mb);
    let max_io = max_of(|s| s.io_requests_per_sec);

    snapshots
        .iter()
        .map(|s| AwrBar {
            label: format!("#{} {}", s.snap_id, s.begin_interval_time),
            cpu_usage_percent: s.cpu_usage_percent,
            memory_usage_mb: s.memory_usage_mb,
            io_requests_per_sec: s.io_requests_per_sec,
            cpu_width: width(s.cpu_usage_percent, max_cpu),
            memory_width: width(s.memory_usage_mb, max_memory),
            io_width: width(s.io_requests_per_sec, max_io),
        })
        .collect()
}

#[derive(Debug)]
pub struct PerformancePageData {
    pub metrics: Option<PerformanceMetrics>,
    /// `None` until a reporting window is chosen.
    pub awr: Option<Vec<AwrSnapshot>>,
    pub awr_chart: Vec<AwrBar>,
    pub ash: Paginated<AshSample>,
    /// Sections that failed to load.
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::types::BackendTimestamp;

    fn snapshot(id: i64, cpu: f64, memory: f64, io: f64) -> AwrSnapshot {
        let at = BackendTimestamp::new(
            NaiveDate::from_ymd_opt(2024, 12, 31)
                .unwrap()
                .and_hms_opt(id as u32, 0, 0)
                .unwrap(),
        );
        AwrSnapshot {
            snap_id: id,
            begin_interval_time: at,
            end_interval_time: at,
            cpu_usage_percent: cpu,
            memory_usage_mb: memory,
            io_requests_per_sec: io,
        }
    }

    #[test]
    fn bars_scale_against_series_maximum() {
        let bars = awr_chart(&[snapshot(1, 20.0, 512.0, 0.0), snapshot(2, 80.0, 1024.0, 0.0)]);
        assert_eq!(bars[0].cpu_width, 25.0);
        assert_eq!(bars[1].cpu_width, 100.0);
        assert_eq!(bars[0].memory_width, 50.0);
        assert_eq!(bars[0].io_width, 0.0);
        assert_eq!(bars[1].label, "#2 2024-12-31 02:00:00");
    }

    #[test]
    fn empty_report_has_no_bars() {
        assert!(awr_chart(&[]).is_empty());
    }
}
