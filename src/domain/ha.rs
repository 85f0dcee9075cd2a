use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::BackendTimestamp;

/// Current Data Guard role and health of the primary database.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct DataGuardStatus {
    pub database_role: String,
    pub protection_mode: String,
    pub switchover_status: String,
    pub status: String,
    pub timestamp: BackendTimestamp,
}

impl DataGuardStatus {
    pub fn is_online(&self) -> bool {
        self.status.eq_ignore_ascii_case("ONLINE")
    }
}

/// Connection data for a primary/standby pair.
#[derive(Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DataGuardConfig {
    pub primary_host: String,
    pub primary_port: u16,
    pub standby_host: String,
    pub standby_port: u16,
    pub sysdba_username: String,
    pub sysdba_password: String,
    pub primary_db_name: String,
    pub standby_db_name: String,
}

impl fmt::Debug for DataGuardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataGuardConfig")
            .field("primary_host", &self.primary_host)
            .field("primary_port", &self.primary_port)
            .field("standby_host", &self.standby_host)
            .field("standby_port", &self.standby_port)
            .field("sysdba_username", &self.sysdba_username)
            .field("sysdba_password", &"***")
            .field("primary_db_name", &self.primary_db_name)
            .field("standby_db_name", &self.standby_db_name)
            .finish()
    }
}

/// Role transition the backend can simulate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HaOperation {
    Failover,
    Switchback,
}

impl HaOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            HaOperation::Failover => "failover",
            HaOperation::Switchback => "switchback",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HaOperation::Failover => "Failover",
            HaOperation::Switchback => "Switchback",
        }
    }
}

impl TryFrom<&str> for HaOperation {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "failover" => Ok(HaOperation::Failover),
            "switchback" => Ok(HaOperation::Switchback),
            other => Err(format!("unknown operation: {other}")),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct SimulationResult {
    /// Duration of the simulated transition in milliseconds.
    pub execution_time: f64,
}

/// Aggregated outcome of the simulations run within a period.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct AvailabilityReport {
    pub total_simulations: u64,
    pub failover_success_rate: f64,
    pub switchback_success_rate: f64,
    pub avg_failover_time_ms: f64,
    pub avg_switchback_time_ms: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl AvailabilityReport {
    pub fn failover_success_percent(&self) -> f64 {
        self.failover_success_rate * 100.0
    }

    pub fn switchback_success_percent(&self) -> f64 {
        self.switchback_success_rate * 100.0
    }
}
