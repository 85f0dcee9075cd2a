//! Mock backend implementation for isolating services and routes in tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;

use crate::backend::errors::BackendResult;
use crate::backend::{
    BackupReader, BackupWriter, HaReader, HaWriter, OptimizationReader, OptimizationWriter,
    PerformanceReader, PrivilegeReader, PrivilegeWriter, RoleReader, RoleWriter, SecurityReader,
    SecurityWriter, UserReader, UserWriter,
};
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

mock! {
    pub Backend {}

    #[async_trait]
    impl UserReader for Backend {
        async fn list_users(&self) -> BackendResult<Vec<User>>;
        async fn get_user(&self, username: &Username) -> BackendResult<User>;
    }

    #[async_trait]
    impl UserWriter for Backend {
        async fn create_user(&self, new_user: &NewUser) -> BackendResult<()>;
        async fn update_user(&self, username: &Username, updates: &UpdateUser) -> BackendResult<()>;
        async fn delete_user(&self, username: &Username) -> BackendResult<()>;
        async fn lock_user(&self, username: &Username) -> BackendResult<()>;
        async fn unlock_user(&self, username: &Username) -> BackendResult<()>;
        async fn grant_roles(&self, username: &Username, roles: &[RoleName]) -> BackendResult<()>;
        async fn revoke_role(&self, username: &Username, role: &RoleName) -> BackendResult<()>;
    }

    #[async_trait]
    impl RoleReader for Backend {
        async fn list_roles(&self) -> BackendResult<Vec<Role>>;
    }

    #[async_trait]
    impl RoleWriter for Backend {
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
    impl PrivilegeReader for Backend {
        async fn list_privileges(&self) -> BackendResult<Vec<Privilege>>;
        async fn get_privilege(&self, name: &PrivilegeName) -> BackendResult<Privilege>;
    }

    #[async_trait]
    impl PrivilegeWriter for Backend {
        async fn create_privilege(&self, new_privilege: &NewPrivilege) -> BackendResult<()>;
        async fn delete_privilege(&self, name: &PrivilegeName) -> BackendResult<()>;
        async fn grant_privilege(&self, grant: &PrivilegeGrant) -> BackendResult<()>;
    }

    #[async_trait]
    impl BackupReader for Backend {
        async fn list_backups(&self) -> BackendResult<Vec<BackupHistory>>;
    }

    #[async_trait]
    impl BackupWriter for Backend {
        async fn full_backup(&self) -> BackendResult<()>;
        async fn incremental_backup(&self, level: BackupLevel) -> BackendResult<()>;
        async fn restore(&self) -> BackendResult<()>;
    }

    #[async_trait]
    impl PerformanceReader for Backend {
        async fn real_time_metrics(&self) -> BackendResult<PerformanceMetrics>;
        async fn awr_report(&self, range: &DateRange) -> BackendResult<Vec<AwrSnapshot>>;
        async fn ash_report(&self) -> BackendResult<Vec<AshSample>>;
    }

    #[async_trait]
    impl OptimizationReader for Backend {
        async fn slow_queries(&self) -> BackendResult<Vec<SlowQuery>>;
        async fn tuning_recommendation(&self, query_id: i64) -> BackendResult<String>;
    }

    #[async_trait]
    impl OptimizationWriter for Backend {
        async fn gather_table_stats(
            &self,
            schema: &SchemaName,
            table: &TableName,
        ) -> BackendResult<()>;
        async fn schedule_stats_gathering(&self, schema: &SchemaName) -> BackendResult<()>;
    }

    #[async_trait]
    impl HaReader for Backend {
        async fn data_guard_status(&self) -> BackendResult<DataGuardStatus>;
        async fn availability_report(
            &self,
            start_date: NaiveDate,
            end_date: NaiveDate,
        ) -> BackendResult<AvailabilityReport>;
    }

    #[async_trait]
    impl HaWriter for Backend {
        async fn configure_data_guard(&self, config: &DataGuardConfig) -> BackendResult<()>;
        async fn simulate(&self, operation: HaOperation) -> BackendResult<SimulationResult>;
    }

    #[async_trait]
    impl SecurityReader for Backend {
        async fn tde_configurations(&self) -> BackendResult<Vec<TdeConfig>>;
        async fn vpd_policies(&self) -> BackendResult<Vec<VpdPolicy>>;
        async fn audit_configurations(&self) -> BackendResult<Vec<AuditConfig>>;
    }

    #[async_trait]
    impl SecurityWriter for Backend {
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
}
