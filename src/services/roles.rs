//! Services handling roles and the privileges granted to them.

use crate::backend::{PrivilegeReader, RoleReader, RoleWriter};
use crate::domain::role::NewRole;
use crate::domain::types::{PrivilegeName, RoleName};
use crate::dto::roles::{RolePageData, RolesPageData};
use crate::dto::{Assignment, ListQuery};
use crate::forms::roles::{CreateRoleForm, GrantRolePrivilegesForm};
use crate::services::{ServiceError, ServiceResult};

/// Loads the paginated role list and the privileges offered when creating a
/// role. The role list is required; the privilege choices are not.
pub async fn list_roles<B>(backend: &B, query: &ListQuery) -> ServiceResult<RolesPageData>
where
    B: RoleReader + PrivilegeReader + ?Sized,
{
    let roles = backend.list_roles().await.map_err(|err| {
        log::error!("Failed to list roles: {err}");
        err
    })?;

    let privileges = backend.list_privileges().await.unwrap_or_else(|err| {
        log::error!("Failed to list privileges: {err}");
        Vec::new()
    });

    Ok(RolesPageData {
        roles: query.paginate(roles),
        privileges,
    })
}

/// Loads one role and flags which known privileges it already holds.
pub async fn load_role<B>(backend: &B, name: &str, query: &ListQuery) -> ServiceResult<RolePageData>
where
    B: RoleReader + PrivilegeReader + ?Sized,
{
    let name = RoleName::new(name)?;

    let role = backend
        .list_roles()
        .await?
        .into_iter()
        .find(|role| role.name.eq_ignore_ascii_case(name.as_str()))
        .ok_or(ServiceError::NotFound)?;

    let privileges = backend
        .list_privileges()
        .await
        .map_err(|err| {
            log::error!("Failed to list privileges for role {name}: {err}");
            err
        })?
        .into_iter()
        .map(|privilege| Assignment {
            granted: role.has_privilege(&privilege.name),
            name: privilege.name,
        })
        .collect();

    Ok(RolePageData {
        role,
        privileges: query.paginate(privileges),
    })
}

pub async fn create_role<B>(backend: &B, body: &[u8]) -> ServiceResult<RoleName>
where
    B: RoleWriter + ?Sized,
{
    let new_role = NewRole::try_from(CreateRoleForm::from_bytes(body)?)?;

    backend.create_role(&new_role).await.map_err(|err| {
        log::error!("Failed to create role {}: {err}", new_role.name);
        err
    })?;

    log::info!("Created role {}", new_role.name);
    Ok(new_role.name)
}

pub async fn delete_role<B>(backend: &B, name: &str) -> ServiceResult<()>
where
    B: RoleWriter + ?Sized,
{
    let name = RoleName::new(name)?;

    backend.delete_role(&name).await.map_err(|err| {
        log::error!("Failed to delete role {name}: {err}");
        err
    })?;

    log::info!("Deleted role {name}");
    Ok(())
}

/// Grants every privilege ticked in the form body. Returns how many were sent.
pub async fn grant_privileges<B>(backend: &B, name: &str, body: &[u8]) -> ServiceResult<usize>
where
    B: RoleWriter + ?Sized,
{
    let name = RoleName::new(name)?;
    let privileges = GrantRolePrivilegesForm::from_bytes(body)?.into_privilege_names()?;

    backend
        .grant_privileges_to_role(&name, &privileges)
        .await
        .map_err(|err| {
            log::error!("Failed to grant privileges to role {name}: {err}");
            err
        })?;

    Ok(privileges.len())
}

pub async fn revoke_privilege<B>(backend: &B, name: &str, privilege: &str) -> ServiceResult<()>
where
    B: RoleWriter + ?Sized,
{
    let name = RoleName::new(name)?;
    let privilege = PrivilegeName::new(privilege)?;

    backend
        .revoke_privilege_from_role(&name, &privilege)
        .await
        .map_err(|err| {
            log::error!("Failed to revoke {privilege} from role {name}: {err}");
            err
        })?;

    Ok(())
}
