//! Services handling database account administration.

use crate::backend::{RoleReader, UserReader, UserWriter};
use crate::domain::types::{RoleName, Username};
use crate::domain::user::{NewUser, UpdateUser};
use crate::dto::users::{UserPageData, UsersPageData};
use crate::dto::{Assignment, ListQuery};
use crate::forms::users::{CreateUserForm, EditUserForm, GrantRolesForm};
use crate::services::ServiceResult;

/// Loads the searchable, paginated list of accounts.
pub async fn list_users<B>(backend: &B, query: &ListQuery) -> ServiceResult<UsersPageData>
where
    B: UserReader + ?Sized,
{
    let users = backend.list_users().await.map_err(|err| {
        log::error!("Failed to list users: {err}");
        err
    })?;

    Ok(UsersPageData {
        users: query.paginate(users),
    })
}

/// Loads an account together with every role it could be granted.
pub async fn load_user<B>(
    backend: &B,
    username: &str,
    query: &ListQuery,
) -> ServiceResult<UserPageData>
where
    B: UserReader + RoleReader + ?Sized,
{
    let username = Username::new(username)?;

    let user = backend.get_user(&username).await?;

    let roles = backend
        .list_roles()
        .await
        .map_err(|err| {
            log::error!("Failed to list roles for {username}: {err}");
            err
        })?
        .into_iter()
        .map(|role| Assignment {
            granted: user.has_role(&role.name),
            name: role.name,
        })
        .collect();

    Ok(UserPageData {
        user,
        roles: query.paginate(roles),
    })
}

/// Validates the form and creates the account.
pub async fn create_user<B>(backend: &B, form: CreateUserForm) -> ServiceResult<Username>
where
    B: UserWriter + ?Sized,
{
    let new_user = NewUser::try_from(form)?;

    backend.create_user(&new_user).await.map_err(|err| {
        log::error!("Failed to create user {}: {err}", new_user.username);
        err
    })?;

    log::info!("Created user {}", new_user.username);
    Ok(new_user.username)
}

pub async fn update_user<B>(backend: &B, username: &str, form: EditUserForm) -> ServiceResult<()>
where
    B: UserWriter + ?Sized,
{
    let username = Username::new(username)?;
    let updates = UpdateUser::try_from(form)?;

    backend.update_user(&username, &updates).await.map_err(|err| {
        log::error!("Failed to update user {username}: {err}");
        err
    })?;

    Ok(())
}

pub async fn delete_user<B>(backend: &B, username: &str) -> ServiceResult<()>
where
    B: UserWriter + ?Sized,
{
    let username = Username::new(username)?;

    backend.delete_user(&username).await.map_err(|err| {
        log::error!("Failed to delete user {username}: {err}");
        err
    })?;

    log::info!("Deleted user {username}");
    Ok(())
}

pub async fn lock_user<B>(backend: &B, username: &str) -> ServiceResult<()>
where
    B: UserWriter + ?Sized,
{
    let username = Username::new(username)?;

    backend.lock_user(&username).await.map_err(|err| {
        log::error!("Failed to lock user {username}: {err}");
        err
    })?;

    Ok(())
}

pub async fn unlock_user<B>(backend: &B, username: &str) -> ServiceResult<()>
where
    B: UserWriter + ?Sized,
{
    let username = Username::new(username)?;

    backend.unlock_user(&username).await.map_err(|err| {
        log::error!("Failed to unlock user {username}: {err}");
        err
    })?;

    Ok(())
}

/// Grants every role ticked in the form body. Returns how many were sent.
pub async fn grant_roles<B>(backend: &B, username: &str, body: &[u8]) -> ServiceResult<usize>
where
    B: UserWriter + ?Sized,
{
    let username = Username::new(username)?;
    let roles = GrantRolesForm::from_bytes(body)?.into_role_names()?;

    backend.grant_roles(&username, &roles).await.map_err(|err| {
        log::error!("Failed to grant roles to {username}: {err}");
        err
    })?;

    Ok(roles.len())
}

pub async fn revoke_role<B>(backend: &B, username: &str, role: &str) -> ServiceResult<()>
where
    B: UserWriter + ?Sized,
{
    let username = Username::new(username)?;
    let role = RoleName::new(role)?;

    backend.revoke_role(&username, &role).await.map_err(|err| {
        log::error!("Failed to revoke {role} from {username}: {err}");
        err
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::errors::BackendError;
    use crate::backend::mock::MockBackend;
    use crate::domain::role::Role;
    use crate::domain::user::User;
    use crate::services::ServiceError;

    fn user(name: &str, roles: &[&str]) -> User {
        serde_json::from_value(serde_json::json!({
            "username": name,
            "roles": roles,
        }))
        .unwrap()
    }

    fn role(name: &str) -> Role {
        Role {
            name: name.to_string(),
            privileges: vec![],
            description: None,
        }
    }

    #[tokio::test]
    async fn list_filters_and_paginates() {
        let mut backend = MockBackend::new();
        backend.expect_list_users().returning(|| {
            Ok((0..25)
                .map(|i| user(&format!("APP_{i:02}"), &[]))
                .chain([user("SCOTT", &["DBA"])])
                .collect())
        });

        let query = ListQuery {
            search: Some("app_".to_string()),
            page: Some(3),
        };
        let data = list_users(&backend, &query).await.unwrap();

        assert_eq!(data.users.total_items, 25);
        assert_eq!(data.users.total_pages, 3);
        assert_eq!(data.users.items.len(), 5);
        assert_eq!(data.users.items[0].username, "APP_20");
    }

    #[tokio::test]
    async fn load_user_flags_granted_roles() {
        let mut backend = MockBackend::new();
        backend
            .expect_get_user()
            .withf(|username| username.as_str() == "SCOTT")
            .returning(|_| Ok(user("SCOTT", &["CONNECT"])));
        backend
            .expect_list_roles()
            .returning(|| Ok(vec![role("CONNECT"), role("DBA")]));

        let data = load_user(&backend, "SCOTT", &ListQuery::default())
            .await
            .unwrap();

        assert_eq!(
            data.roles.items,
            vec![
                Assignment {
                    name: "CONNECT".to_string(),
                    granted: true
                },
                Assignment {
                    name: "DBA".to_string(),
                    granted: false
                },
            ]
        );
    }

    #[tokio::test]
    async fn load_missing_user_is_not_found() {
        let mut backend = MockBackend::new();
        backend.expect_get_user().returning(|_| {
            Err(BackendError::Status {
                status: 404,
                body: String::new(),
            })
        });
        backend.expect_list_roles().times(0);

        let result = load_user(&backend, "GHOST", &ListQuery::default()).await;

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_backend() {
        let mut backend = MockBackend::new();
        backend.expect_create_user().times(0);

        let form = CreateUserForm {
            username: "scott".to_string(),
            password: "weak".to_string(),
            default_tablespace: "USERS".to_string(),
            temporary_tablespace: "TEMP".to_string(),
            quota_limit: String::new(),
            account_locked: false,
            password_expiry_date: String::new(),
        };

        let result = create_user(&backend, form).await;

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[tokio::test]
    async fn grant_roles_sends_selection() {
        let mut backend = MockBackend::new();
        backend
            .expect_grant_roles()
            .withf(|username, roles| {
                username.as_str() == "SCOTT"
                    && roles.iter().map(RoleName::as_str).collect::<Vec<_>>()
                        == ["CONNECT", "RESOURCE"]
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let granted = grant_roles(&backend, "SCOTT", b"roles=CONNECT&roles=RESOURCE")
            .await
            .unwrap();

        assert_eq!(granted, 2);
    }

    #[tokio::test]
    async fn backend_failure_is_reported() {
        let mut backend = MockBackend::new();
        backend.expect_lock_user().returning(|_| {
            Err(BackendError::Status {
                status: 500,
                body: "ORA-01031: insufficient privileges".to_string(),
            })
        });

        let err = lock_user(&backend, "SCOTT").await.unwrap_err();

        assert_eq!(
            err.user_message("Failed to lock user"),
            "Failed to lock user: ORA-01031: insufficient privileges"
        );
    }
}
