//! Services handling privilege definitions and grants.

use crate::backend::{PrivilegeReader, PrivilegeWriter, UserReader};
use crate::domain::privilege::{NewPrivilege, Privilege, PrivilegeGrant};
use crate::domain::types::PrivilegeName;
use crate::dto::ListQuery;
use crate::dto::privileges::PrivilegesPageData;
use crate::forms::privileges::{CreatePrivilegeForm, GrantPrivilegeForm};
use crate::services::ServiceResult;

/// Loads the privilege list and the account names offered as grantees.
pub async fn list_privileges<B>(backend: &B, query: &ListQuery) -> ServiceResult<PrivilegesPageData>
where
    B: PrivilegeReader + UserReader + ?Sized,
{
    let privileges = backend.list_privileges().await.map_err(|err| {
        log::error!("Failed to list privileges: {err}");
        err
    })?;

    let usernames = match backend.list_users().await {
        Ok(users) => users.into_iter().map(|user| user.username).collect(),
        Err(err) => {
            log::error!("Failed to list grantees: {err}");
            Vec::new()
        }
    };

    Ok(PrivilegesPageData {
        privileges: query.paginate(privileges),
        usernames,
    })
}

pub async fn load_privilege<B>(backend: &B, name: &str) -> ServiceResult<Privilege>
where
    B: PrivilegeReader + ?Sized,
{
    let name = PrivilegeName::new(name)?;
    Ok(backend.get_privilege(&name).await?)
}

pub async fn create_privilege<B>(backend: &B, form: CreatePrivilegeForm) -> ServiceResult<()>
where
    B: PrivilegeWriter + ?Sized,
{
    let new_privilege = NewPrivilege::try_from(form)?;

    backend
        .create_privilege(&new_privilege)
        .await
        .map_err(|err| {
            log::error!("Failed to create privilege {}: {err}", new_privilege.name);
            err
        })?;

    Ok(())
}

pub async fn delete_privilege<B>(backend: &B, name: &str) -> ServiceResult<()>
where
    B: PrivilegeWriter + ?Sized,
{
    let name = PrivilegeName::new(name)?;

    backend.delete_privilege(&name).await.map_err(|err| {
        log::error!("Failed to delete privilege {name}: {err}");
        err
    })?;

    Ok(())
}

/// Grants a system or object privilege directly to an account.
pub async fn grant_privilege<B>(backend: &B, form: GrantPrivilegeForm) -> ServiceResult<PrivilegeGrant>
where
    B: PrivilegeWriter + ?Sized,
{
    let grant = PrivilegeGrant::try_from(form)?;

    backend.grant_privilege(&grant).await.map_err(|err| {
        log::error!("Failed to grant {grant:?}: {err}");
        err
    })?;

    log::info!("Granted {} privilege", grant.privilege_type());
    Ok(grant)
}
