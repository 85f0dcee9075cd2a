//! [`reqwest`]-based implementation of the backend traits.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::backend::endpoints::Endpoints;
use crate::backend::errors::{BackendError, BackendResult};
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

const AWR_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const REPORT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Settings used to build an [`HttpBackend`].
#[derive(Clone, Debug)]
pub struct BackendOptions {
    pub base_url: String,
    /// Cookie header forwarded with every request.
    pub cookie: Option<String>,
    pub timeout: Duration,
}

#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    endpoints: Arc<Endpoints>,
}

impl HttpBackend {
    pub fn new(options: &BackendOptions) -> BackendResult<Self> {
        let endpoints = Endpoints::new(&options.base_url)?;

        let mut headers = HeaderMap::new();
        if let Some(cookie) = options.cookie.as_deref().filter(|c| !c.trim().is_empty()) {
            let mut value = HeaderValue::from_str(cookie)
                .map_err(|e| BackendError::InvalidRequest(format!("invalid cookie: {e}")))?;
            value.set_sensitive(true);
            headers.insert(header::COOKIE, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(options.timeout)
            .build()?;

        Ok(Self {
            client,
            endpoints: Arc::new(endpoints),
        })
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        log::debug!("{method} {url}");
        self.client.request(method, url)
    }

    /// Sends the request and turns any non-2xx response into an error
    /// carrying the response body.
    async fn send(&self, builder: RequestBuilder) -> BackendResult<Response> {
        let response = builder.send().await.map_err(|err| {
            log::error!("Backend request failed: {err}");
            BackendError::from(err)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().clone();
        let body = response.text().await.unwrap_or_default();
        log::error!("Backend call {url} failed with {status}: {body}");
        Err(BackendError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> BackendResult<T> {
        let response = self.send(builder).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|err| {
            log::error!("Failed to decode backend response: {err}");
            BackendError::from(err)
        })
    }

    async fn execute(&self, builder: RequestBuilder) -> BackendResult<()> {
        self.send(builder).await.map(|_| ())
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> BackendResult<T> {
        self.fetch(self.request(Method::GET, url)).await
    }

    async fn post_json<B: Serialize + ?Sized + Sync>(&self, url: Url, body: &B) -> BackendResult<()> {
        self.execute(self.request(Method::POST, url).json(body)).await
    }

    async fn post(&self, url: Url) -> BackendResult<()> {
        self.execute(self.request(Method::POST, url)).await
    }

    async fn delete(&self, url: Url) -> BackendResult<()> {
        self.execute(self.request(Method::DELETE, url)).await
    }
}

#[async_trait]
impl UserReader for HttpBackend {
    async fn list_users(&self) -> BackendResult<Vec<User>> {
        self.get(self.endpoints.users()).await
    }

    async fn get_user(&self, username: &Username) -> BackendResult<User> {
        self.get(self.endpoints.user(username.as_str())).await
    }
}

#[async_trait]
impl UserWriter for HttpBackend {
    async fn create_user(&self, new_user: &NewUser) -> BackendResult<()> {
        self.post_json(self.endpoints.users(), new_user).await
    }

    async fn update_user(&self, username: &Username, updates: &UpdateUser) -> BackendResult<()> {
        let builder = self
            .request(Method::PUT, self.endpoints.user(username.as_str()))
            .json(updates);
        self.execute(builder).await
    }

    async fn delete_user(&self, username: &Username) -> BackendResult<()> {
        self.delete(self.endpoints.user(username.as_str())).await
    }

    async fn lock_user(&self, username: &Username) -> BackendResult<()> {
        self.post(self.endpoints.user_lock(username.as_str())).await
    }

    async fn unlock_user(&self, username: &Username) -> BackendResult<()> {
        self.post(self.endpoints.user_unlock(username.as_str())).await
    }

    async fn grant_roles(&self, username: &Username, roles: &[RoleName]) -> BackendResult<()> {
        #[derive(Serialize)]
        struct RoleRef<'a> {
            name: &'a str,
        }

        let body: Vec<RoleRef<'_>> = roles
            .iter()
            .map(|role| RoleRef {
                name: role.as_str(),
            })
            .collect();
        self.post_json(self.endpoints.user_roles_bulk(username.as_str()), &body)
            .await
    }

    async fn revoke_role(&self, username: &Username, role: &RoleName) -> BackendResult<()> {
        self.delete(self.endpoints.user_role(username.as_str(), role.as_str()))
            .await
    }
}

#[async_trait]
impl RoleReader for HttpBackend {
    async fn list_roles(&self) -> BackendResult<Vec<Role>> {
        self.get(self.endpoints.roles()).await
    }
}

#[async_trait]
impl RoleWriter for HttpBackend {
    async fn create_role(&self, new_role: &NewRole) -> BackendResult<()> {
        self.post_json(self.endpoints.roles(), new_role).await
    }

    async fn delete_role(&self, role: &RoleName) -> BackendResult<()> {
        self.delete(self.endpoints.role(role.as_str())).await
    }

    async fn grant_privileges_to_role(
        &self,
        role: &RoleName,
        privileges: &[PrivilegeName],
    ) -> BackendResult<()> {
        self.post_json(self.endpoints.role_privileges(role.as_str()), privileges)
            .await
    }

    async fn revoke_privilege_from_role(
        &self,
        role: &RoleName,
        privilege: &PrivilegeName,
    ) -> BackendResult<()> {
        self.delete(
            self.endpoints
                .role_privilege(role.as_str(), privilege.as_str()),
        )
        .await
    }
}

#[async_trait]
impl PrivilegeReader for HttpBackend {
    async fn list_privileges(&self) -> BackendResult<Vec<Privilege>> {
        self.get(self.endpoints.privileges()).await
    }

    async fn get_privilege(&self, name: &PrivilegeName) -> BackendResult<Privilege> {
        self.get(self.endpoints.privilege(name.as_str())).await
    }
}

#[async_trait]
impl PrivilegeWriter for HttpBackend {
    async fn create_privilege(&self, new_privilege: &NewPrivilege) -> BackendResult<()> {
        self.post_json(self.endpoints.privileges(), new_privilege)
            .await
    }

    async fn delete_privilege(&self, name: &PrivilegeName) -> BackendResult<()> {
        self.delete(self.endpoints.privilege(name.as_str())).await
    }

    async fn grant_privilege(&self, grant: &PrivilegeGrant) -> BackendResult<()> {
        let url = match grant {
            PrivilegeGrant::System { .. } => self.endpoints.grant_system_privilege(),
            PrivilegeGrant::Object { .. } => self.endpoints.grant_object_privilege(),
        };
        let builder = self
            .request(Method::POST, url)
            .form(&grant.form_params());
        self.execute(builder).await
    }
}

#[async_trait]
impl BackupReader for HttpBackend {
    async fn list_backups(&self) -> BackendResult<Vec<BackupHistory>> {
        self.get(self.endpoints.rman_backups()).await
    }
}

#[async_trait]
impl BackupWriter for HttpBackend {
    async fn full_backup(&self) -> BackendResult<()> {
        self.post(self.endpoints.rman_full_backup()).await
    }

    async fn incremental_backup(&self, level: BackupLevel) -> BackendResult<()> {
        self.post(self.endpoints.rman_incremental_backup(level))
            .await
    }

    async fn restore(&self) -> BackendResult<()> {
        self.post(self.endpoints.rman_restore()).await
    }
}

#[async_trait]
impl PerformanceReader for HttpBackend {
    async fn real_time_metrics(&self) -> BackendResult<PerformanceMetrics> {
        self.get(self.endpoints.real_time_metrics()).await
    }

    async fn awr_report(&self, range: &DateRange) -> BackendResult<Vec<AwrSnapshot>> {
        let builder = self
            .request(Method::GET, self.endpoints.awr_report())
            .query(&[
                ("start", range.start().format(AWR_TIMESTAMP_FORMAT).to_string()),
                ("end", range.end().format(AWR_TIMESTAMP_FORMAT).to_string()),
            ]);
        self.fetch(builder).await
    }

    async fn ash_report(&self) -> BackendResult<Vec<AshSample>> {
        self.get(self.endpoints.ash_report()).await
    }
}

#[async_trait]
impl OptimizationReader for HttpBackend {
    async fn slow_queries(&self) -> BackendResult<Vec<SlowQuery>> {
        self.get(self.endpoints.slow_queries()).await
    }

    async fn tuning_recommendation(&self, query_id: i64) -> BackendResult<String> {
        let builder = self
            .request(
                Method::POST,
                self.endpoints.tuning_recommendation(query_id),
            )
            .header(header::CONTENT_TYPE, "application/json");
        let response = self.send(builder).await?;
        Ok(response.text().await?)
    }
}

#[async_trait]
impl OptimizationWriter for HttpBackend {
    async fn gather_table_stats(
        &self,
        schema: &SchemaName,
        table: &TableName,
    ) -> BackendResult<()> {
        let builder = self
            .request(Method::POST, self.endpoints.gather_table_stats())
            .query(&[("schemaName", schema.as_str()), ("tableName", table.as_str())]);
        self.execute(builder).await
    }

    async fn schedule_stats_gathering(&self, schema: &SchemaName) -> BackendResult<()> {
        let builder = self
            .request(Method::POST, self.endpoints.schedule_stats_gathering())
            .query(&[("schemaName", schema.as_str())]);
        self.execute(builder).await
    }
}

#[async_trait]
impl HaReader for HttpBackend {
    async fn data_guard_status(&self) -> BackendResult<DataGuardStatus> {
        self.get(self.endpoints.ha_status()).await
    }

    async fn availability_report(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> BackendResult<AvailabilityReport> {
        let builder = self
            .request(Method::GET, self.endpoints.ha_report())
            .query(&[
                ("startDate", start_date.format(REPORT_DATE_FORMAT).to_string()),
                ("endDate", end_date.format(REPORT_DATE_FORMAT).to_string()),
            ]);
        self.fetch(builder).await
    }
}

#[async_trait]
impl HaWriter for HttpBackend {
    async fn configure_data_guard(&self, config: &DataGuardConfig) -> BackendResult<()> {
        self.post_json(self.endpoints.ha_configure(), config).await
    }

    async fn simulate(&self, operation: HaOperation) -> BackendResult<SimulationResult> {
        self.fetch(self.request(Method::POST, self.endpoints.ha_simulate(operation.as_str())))
            .await
    }
}

#[async_trait]
impl SecurityReader for HttpBackend {
    async fn tde_configurations(&self) -> BackendResult<Vec<TdeConfig>> {
        self.get(self.endpoints.tde_configurations()).await
    }

    async fn vpd_policies(&self) -> BackendResult<Vec<VpdPolicy>> {
        self.get(self.endpoints.vpd_policies()).await
    }

    async fn audit_configurations(&self) -> BackendResult<Vec<AuditConfig>> {
        self.get(self.endpoints.audit_configurations()).await
    }
}

#[async_trait]
impl SecurityWriter for HttpBackend {
    async fn enable_tde(
        &self,
        column: &TdeColumn,
        algorithm: EncryptionAlgorithm,
    ) -> BackendResult<TdeConfig> {
        let builder = self
            .request(Method::POST, self.endpoints.tde_enable())
            .header(header::CONTENT_TYPE, "application/json")
            .query(&[
                ("tableName", column.table_name.as_str()),
                ("columnName", column.column_name.as_str()),
                ("algorithm", algorithm.as_str()),
            ]);
        self.fetch(builder).await
    }

    async fn disable_tde(&self, column: &TdeColumn) -> BackendResult<()> {
        let builder = self
            .request(Method::POST, self.endpoints.tde_disable())
            .header(header::CONTENT_TYPE, "application/json")
            .query(&[
                ("tableName", column.table_name.as_str()),
                ("columnName", column.column_name.as_str()),
            ]);
        self.execute(builder).await
    }

    async fn create_vpd_policy(&self, policy: &NewVpdPolicy) -> BackendResult<VpdPolicy> {
        self.fetch(
            self.request(Method::POST, self.endpoints.vpd_policies())
                .json(policy),
        )
        .await
    }

    async fn delete_vpd_policy(&self, policy_name: &PolicyName) -> BackendResult<()> {
        self.delete(self.endpoints.vpd_policy(policy_name.as_str()))
            .await
    }

    async fn enable_audit(&self, config: &NewAuditConfig) -> BackendResult<AuditConfig> {
        self.fetch(
            self.request(Method::POST, self.endpoints.audit_enable())
                .json(config),
        )
        .await
    }

    async fn disable_audit(&self, table: &TableName) -> BackendResult<()> {
        let builder = self
            .request(Method::POST, self.endpoints.audit_disable())
            .query(&[("tableName", table.as_str())]);
        self.execute(builder).await
    }
}
