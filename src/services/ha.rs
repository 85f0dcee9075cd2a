//! Services for Data Guard status, configuration and role-transition drills.

use chrono::{Days, NaiveDate};

use crate::backend::{HaReader, HaWriter};
use crate::domain::ha::{DataGuardConfig, HaOperation, SimulationResult};
use crate::dto::ha::{HaPageData, REPORT_WINDOW_DAYS};
use crate::forms::ha::DataGuardConfigForm;
use crate::services::{ServiceError, ServiceResult};

/// Loads the Data Guard status and the availability report for the window
/// ending on `today`.
pub async fn load_ha<B>(backend: &B, today: NaiveDate) -> HaPageData
where
    B: HaReader + ?Sized,
{
    let report_start = today
        .checked_sub_days(Days::new(REPORT_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MIN);
    let mut errors = Vec::new();

    let status = match backend.data_guard_status().await {
        Ok(status) => Some(status),
        Err(err) => {
            log::error!("Failed to load Data Guard status: {err}");
            errors.push("Failed to load Data Guard status.".to_string());
            None
        }
    };

    let report = match backend.availability_report(report_start, today).await {
        Ok(report) => Some(report),
        Err(err) => {
            log::error!("Failed to load availability report: {err}");
            errors.push("Failed to load availability report.".to_string());
            None
        }
    };

    HaPageData {
        status,
        report,
        report_start,
        report_end: today,
        errors,
    }
}

pub async fn configure_data_guard<B>(backend: &B, form: DataGuardConfigForm) -> ServiceResult<()>
where
    B: HaWriter + ?Sized,
{
    let config = DataGuardConfig::try_from(form)?;

    backend.configure_data_guard(&config).await.map_err(|err| {
        log::error!("Failed to configure Data Guard: {err}");
        err
    })?;

    log::info!(
        "Configured Data Guard between {} and {}",
        config.primary_db_name,
        config.standby_db_name
    );
    Ok(())
}

/// Runs a simulated failover or switchback named by the URL segment.
pub async fn simulate<B>(backend: &B, operation: &str) -> ServiceResult<(HaOperation, SimulationResult)>
where
    B: HaWriter + ?Sized,
{
    let operation = HaOperation::try_from(operation).map_err(|_| ServiceError::NotFound)?;

    let result = backend.simulate(operation).await.map_err(|err| {
        log::error!("Failed to simulate {}: {err}", operation.as_str());
        err
    })?;

    log::info!(
        "{} simulated in {:.2} ms",
        operation.label(),
        result.execution_time
    );
    Ok((operation, result))
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::backend::errors::BackendError;
    use crate::backend::mock::MockBackend;

    #[tokio::test]
    async fn report_covers_last_thirty_days() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

        let mut backend = MockBackend::new();
        backend
            .expect_data_guard_status()
            .returning(|| Err(BackendError::Network("refused".into())));
        backend
            .expect_availability_report()
            .with(eq(start), eq(today))
            .returning(|start, end| {
                Ok(crate::domain::ha::AvailabilityReport {
                    total_simulations: 2,
                    failover_success_rate: 1.0,
                    switchback_success_rate: 0.5,
                    avg_failover_time_ms: 100.0,
                    avg_switchback_time_ms: 80.0,
                    start_date: start,
                    end_date: end,
                })
            });

        let data = load_ha(&backend, today).await;

        assert!(data.status.is_none());
        assert_eq!(data.errors.len(), 1);
        assert_eq!(data.report_start, start);
        assert_eq!(data.report.unwrap().total_simulations, 2);
    }

    #[tokio::test]
    async fn unknown_operation_is_not_found() {
        let mut backend = MockBackend::new();
        backend.expect_simulate().times(0);

        let result = simulate(&backend, "reboot").await;
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[tokio::test]
    async fn switchback_returns_timing() {
        let mut backend = MockBackend::new();
        backend
            .expect_simulate()
            .with(eq(HaOperation::Switchback))
            .returning(|_| {
                Ok(SimulationResult {
                    execution_time: 812.5,
                })
            });

        let (operation, result) = simulate(&backend, "switchback").await.unwrap();
        assert_eq!(operation, HaOperation::Switchback);
        assert_eq!(result.execution_time, 812.5);
    }
}
