//! Typed client for the database management API.
//!
//! Each backend domain is split into a reader and a writer trait so services
//! only ask for the capabilities they use. [`http::HttpBackend`] implements all
//! of them over HTTP.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::backend::errors::BackendResult;
use crate::domain::backup::BackupHistory;
use crate::domain::ha::{
    AvailabilityReport, DataGuardConfig, DataGuardStatus, HaOperation, SimulationResult,
};
use crate::domain::optimization::SlowQuery;
use crate::domain::performance::{AshSample, AwrSnapshot, PerformanceMetrics};
use crate::domain::privilege::{NewPrivilege, Privilege, PrivilegeGrant};
use crate::domain::role::{NewRole, Role};
use crate::domain::security::{
    AuditConfig, EncryptionAlgorithm, NewAuditConfig, NewVpdPolicy, TdeColumn, TdeConfig,
    VpdPolicy,
};
use crate::domain::types::{
    BackupLevel, DateRange, PolicyName, PrivilegeName, RoleName, SchemaName, TableName, Username,
};
use crate::domain::user::{NewUser, UpdateUser, User};

pub mod endpoints;
pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use http::HttpBackend;

/// Every capability of the management API. Handlers receive the client as
/// `web::Data<dyn Backend>`.
pub trait Backend:
    UserReader
    + UserWriter
    + RoleReader
    + RoleWriter
    + PrivilegeReader
    + PrivilegeWriter
    + BackupReader
    + BackupWriter
    + PerformanceReader
    + OptimizationReader
    + OptimizationWriter
    + HaReader
    + HaWriter
    + SecurityReader
    + SecurityWriter
    + Send
    + Sync
{
}

impl<T> Backend for T where
    T: UserReader
        + UserWriter
        + RoleReader
        + RoleWriter
        + PrivilegeReader
        + PrivilegeWriter
        + BackupReader
        + BackupWriter
        + PerformanceReader
        + OptimizationReader
        + OptimizationWriter
        + HaReader
        + HaWriter
        + SecurityReader
        + SecurityWriter
        + Send
        + Sync
{
}

#[async_trait]
pub trait UserReader {
    async fn list_users(&self) -> BackendResult<Vec<User>>;
    async fn get_user(&self, username: &Username) -> BackendResult<User>;
}

#[async_trait]
pub trait UserWriter {
    async fn create_user(&self, new_user: &NewUser) -> BackendResult<()>;
    async fn update_user(&self, username: &Username, updates: &UpdateUser) -> BackendResult<()>;
    async fn delete_user(&self, username: &Username) -> BackendResult<()>;
    async fn lock_user(&self, username: &Username) -> BackendResult<()>;
    async fn unlock_user(&self, username: &Username) -> BackendResult<()>;
    async fn grant_roles(&self, username: &Username, roles: &[RoleName]) -> BackendResult<()>;
    async fn revoke_role(&self, username: &Username, role: &RoleName) -> BackendResult<()>;
}

#[async_trait]
pub trait RoleReader {
    async fn list_roles(&self) -> BackendResult<Vec<Role>>;
}

#[async_trait]
pub trait RoleWriter {
    async fn create_role(&self, new_role: &NewRole) -> BackendResult<()>;
    async fn delete_role(&self, role: &RoleName) -> BackendResult<()>;
    async fn grant_privileges_to_role(
        &self,
        role: &RoleName,
        privileges: &[PrivilegeName],
    ) -> BackendResult<()>;
    async fn revoke_privilege_from_role(
        &self,
        role: &RoleName,
        privilege: &PrivilegeName,
    ) -> BackendResult<()>;
}

#[async_trait]
pub trait PrivilegeReader {
    async fn list_privileges(&self) -> BackendResult<Vec<Privilege>>;
    async fn get_privilege(&self, name: &PrivilegeName) -> BackendResult<Privilege>;
}

#[async_trait]
pub trait PrivilegeWriter {
    async fn create_privilege(&self, new_privilege: &NewPrivilege) -> BackendResult<()>;
    async fn delete_privilege(&self, name: &PrivilegeName) -> BackendResult<()>;
    async fn grant_privilege(&self, grant: &PrivilegeGrant) -> BackendResult<()>;
}

#[async_trait]
pub trait BackupReader {
    async fn list_backups(&self) -> BackendResult<Vec<BackupHistory>>;
}

#[async_trait]
pub trait BackupWriter {
    async fn full_backup(&self) -> BackendResult<()>;
    async fn incremental_backup(&self, level: BackupLevel) -> BackendResult<()>;
    async fn restore(&self) -> BackendResult<()>;
}

#[async_trait]
pub trait PerformanceReader {
    async fn real_time_metrics(&self) -> BackendResult<PerformanceMetrics>;
    async fn awr_report(&self, range: &DateRange) -> BackendResult<Vec<AwrSnapshot>>;
    async fn ash_report(&self) -> BackendResult<Vec<AshSample>>;
}

#[async_trait]
pub trait OptimizationReader {
    async fn slow_queries(&self) -> BackendResult<Vec<SlowQuery>>;
    /// Plain-text advice produced by the SQL tuning advisor.
    async fn tuning_recommendation(&self, query_id: i64) -> BackendResult<String>;
}

#[async_trait]
pub trait OptimizationWriter {
    async fn gather_table_stats(&self, schema: &SchemaName, table: &TableName)
    -> BackendResult<()>;
    async fn schedule_stats_gathering(&self, schema: &SchemaName) -> BackendResult<()>;
}

#[async_trait]
pub trait HaReader {
    async fn data_guard_status(&self) -> BackendResult<DataGuardStatus>;
    async fn availability_report(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> BackendResult<AvailabilityReport>;
}

#[async_trait]
pub trait HaWriter {
    async fn configure_data_guard(&self, config: &DataGuardConfig) -> BackendResult<()>;
    async fn simulate(&self, operation: HaOperation) -> BackendResult<SimulationResult>;
}

#[async_trait]
pub trait SecurityReader {
    async fn tde_configurations(&self) -> BackendResult<Vec<TdeConfig>>;
    async fn vpd_policies(&self) -> BackendResult<Vec<VpdPolicy>>;
    async fn audit_configurations(&self) -> BackendResult<Vec<AuditConfig>>;
}

#[async_trait]
pub trait SecurityWriter {
    async fn enable_tde(
        &self,
        column: &TdeColumn,
        algorithm: EncryptionAlgorithm,
    ) -> BackendResult<TdeConfig>;
    async fn disable_tde(&self, column: &TdeColumn) -> BackendResult<()>;
    async fn create_vpd_policy(&self, policy: &NewVpdPolicy) -> BackendResult<VpdPolicy>;
    async fn delete_vpd_policy(&self, policy_name: &PolicyName) -> BackendResult<()>;
    async fn enable_audit(&self, config: &NewAuditConfig) -> BackendResult<AuditConfig>;
    async fn disable_audit(&self, table: &TableName) -> BackendResult<()>;
}
