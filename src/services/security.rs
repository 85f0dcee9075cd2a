//! Services for Transparent Data Encryption, Virtual Private Database
//! policies and table auditing.

use crate::backend::{SecurityReader, SecurityWriter};
use crate::domain::security::{
    AuditConfig, NewAuditConfig, NewVpdPolicy, TdeColumn, TdeConfig, VpdPolicy,
};
use crate::domain::types::{PolicyName, TableName};
use crate::dto::ListQuery;
use crate::dto::security::{AuditPageData, TdePageData, VpdPageData};
use crate::forms::security::{
    CreateVpdPolicyForm, DisableAuditForm, DisableTdeForm, EnableAuditForm, EnableTdeForm,
};
use crate::services::ServiceResult;

pub async fn list_tde<B>(backend: &B, query: &ListQuery) -> ServiceResult<TdePageData>
where
    B: SecurityReader + ?Sized,
{
    let configurations = backend.tde_configurations().await.map_err(|err| {
        log::error!("Failed to list TDE configurations: {err}");
        err
    })?;

    Ok(TdePageData {
        configurations: query.paginate(configurations),
    })
}

pub async fn enable_tde<B>(backend: &B, form: EnableTdeForm) -> ServiceResult<TdeConfig>
where
    B: SecurityWriter + ?Sized,
{
    let (column, algorithm) = form.into_parts()?;

    let config = backend.enable_tde(&column, algorithm).await.map_err(|err| {
        log::error!(
            "Failed to enable TDE on {}.{}: {err}",
            column.table_name,
            column.column_name
        );
        err
    })?;

    log::info!(
        "Enabled {algorithm} encryption on {}.{}",
        config.table_name,
        config.column_name
    );
    Ok(config)
}

pub async fn disable_tde<B>(backend: &B, form: DisableTdeForm) -> ServiceResult<TdeColumn>
where
    B: SecurityWriter + ?Sized,
{
    let column = TdeColumn::try_from(form)?;

    backend.disable_tde(&column).await.map_err(|err| {
        log::error!(
            "Failed to disable TDE on {}.{}: {err}",
            column.table_name,
            column.column_name
        );
        err
    })?;

    Ok(column)
}

pub async fn list_vpd_policies<B>(backend: &B, query: &ListQuery) -> ServiceResult<VpdPageData>
where
    B: SecurityReader + ?Sized,
{
    let policies = backend.vpd_policies().await.map_err(|err| {
        log::error!("Failed to list VPD policies: {err}");
        err
    })?;

    Ok(VpdPageData {
        policies: query.paginate(policies),
    })
}

pub async fn create_vpd_policy<B>(backend: &B, form: CreateVpdPolicyForm) -> ServiceResult<VpdPolicy>
where
    B: SecurityWriter + ?Sized,
{
    let policy = NewVpdPolicy::try_from(form)?;

    let created = backend.create_vpd_policy(&policy).await.map_err(|err| {
        log::error!("Failed to create VPD policy {}: {err}", policy.policy_name);
        err
    })?;

    log::info!("Created VPD policy {}", created.policy_name);
    Ok(created)
}

pub async fn delete_vpd_policy<B>(backend: &B, policy_name: &str) -> ServiceResult<()>
where
    B: SecurityWriter + ?Sized,
{
    let policy_name = PolicyName::new(policy_name)?;

    backend
        .delete_vpd_policy(&policy_name)
        .await
        .map_err(|err| {
            log::error!("Failed to delete VPD policy {policy_name}: {err}");
            err
        })?;

    Ok(())
}

pub async fn list_audit_configurations<B>(backend: &B, query: &ListQuery) -> ServiceResult<AuditPageData>
where
    B: SecurityReader + ?Sized,
{
    let configurations = backend.audit_configurations().await.map_err(|err| {
        log::error!("Failed to list audit configurations: {err}");
        err
    })?;

    Ok(AuditPageData {
        configurations: query.paginate(configurations),
    })
}

pub async fn enable_audit<B>(backend: &B, form: EnableAuditForm) -> ServiceResult<AuditConfig>
where
    B: SecurityWriter + ?Sized,
{
    let config = NewAuditConfig::try_from(form)?;

    let created = backend.enable_audit(&config).await.map_err(|err| {
        log::error!("Failed to enable auditing on {}: {err}", config.table_name);
        err
    })?;

    log::info!(
        "Enabled {} auditing on {}",
        created.audit_level,
        created.table_name
    );
    Ok(created)
}

pub async fn disable_audit<B>(backend: &B, form: DisableAuditForm) -> ServiceResult<TableName>
where
    B: SecurityWriter + ?Sized,
{
    let table = TableName::try_from(form)?;

    backend.disable_audit(&table).await.map_err(|err| {
        log::error!("Failed to disable auditing on {table}: {err}");
        err
    })?;

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::errors::BackendError;
    use crate::backend::mock::MockBackend;
    use crate::domain::security::{AuditLevel, EncryptionAlgorithm};
    use crate::services::ServiceError;

    #[tokio::test]
    async fn enable_tde_forwards_column_and_algorithm() {
        let mut backend = MockBackend::new();
        backend
            .expect_enable_tde()
            .withf(|column, algorithm| {
                column.table_name.as_str() == "HR.EMPLOYEES"
                    && column.column_name.as_str() == "SALARY"
                    && *algorithm == EncryptionAlgorithm::Aes192
            })
            .returning(|column, algorithm| {
                Ok(TdeConfig {
                    id: 1,
                    table_name: column.table_name.to_string(),
                    column_name: column.column_name.to_string(),
                    encryption_algorithm: algorithm.to_string(),
                    active: true,
                    created_at: None,
                })
            });

        let form = EnableTdeForm {
            table_name: "HR.EMPLOYEES".to_string(),
            column_name: "SALARY".to_string(),
            algorithm: EncryptionAlgorithm::Aes192,
        };
        let config = enable_tde(&backend, form).await.unwrap();
        assert_eq!(config.encryption_algorithm, "AES192");
    }

    #[tokio::test]
    async fn audit_list_is_searchable() {
        let mut backend = MockBackend::new();
        backend.expect_audit_configurations().returning(|| {
            Ok(["HR.EMPLOYEES", "HR.JOBS", "SALES.ORDERS"]
                .into_iter()
                .enumerate()
                .map(|(i, table)| AuditConfig {
                    id: i as i64,
                    table_name: table.to_string(),
                    audit_level: AuditLevel::All,
                    audit_successful: true,
                    audit_failed: true,
                    created_at: None,
                    created_by: None,
                })
                .collect())
        });

        let query = ListQuery {
            search: Some("hr.".to_string()),
            page: None,
        };
        let data = list_audit_configurations(&backend, &query).await.unwrap();
        assert_eq!(data.configurations.total_items, 2);
    }

    #[tokio::test]
    async fn delete_policy_failure_surfaces_body() {
        let mut backend = MockBackend::new();
        backend.expect_delete_vpd_policy().returning(|_| {
            Err(BackendError::Status {
                status: 409,
                body: "policy in use".to_string(),
            })
        });

        let err = delete_vpd_policy(&backend, "EMP_POLICY").await.unwrap_err();
        assert!(matches!(err, ServiceError::Backend(_)));
        assert_eq!(err.detail(), Some("policy in use"));
    }
}
