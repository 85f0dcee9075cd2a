//! Headline counts for the landing page.

use crate::backend::{PrivilegeReader, RoleReader, UserReader};
use crate::dto::dashboard::{DashboardPageData, DashboardStat};

/// Counts users, roles and privileges. A failing count is shown as unknown
/// rather than failing the page.
pub async fn load_dashboard<B>(backend: &B) -> DashboardPageData
where
    B: UserReader + RoleReader + PrivilegeReader + ?Sized,
{
    let users = backend
        .list_users()
        .await
        .map(|users| users.len())
        .map_err(|err| log::error!("Failed to count users: {err}"))
        .ok();
    let roles = backend
        .list_roles()
        .await
        .map(|roles| roles.len())
        .map_err(|err| log::error!("Failed to count roles: {err}"))
        .ok();
    let privileges = backend
        .list_privileges()
        .await
        .map(|privileges| privileges.len())
        .map_err(|err| log::error!("Failed to count privileges: {err}"))
        .ok();

    DashboardPageData {
        stats: vec![
            DashboardStat {
                name: "Total Users",
                href: "/users",
                value: users,
            },
            DashboardStat {
                name: "Total Roles",
                href: "/roles",
                value: roles,
            },
            DashboardStat {
                name: "Total Privileges",
                href: "/privileges",
                value: privileges,
            },
        ],
    }
}
