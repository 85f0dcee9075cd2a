use crate::domain::privilege::Privilege;
use crate::domain::role::Role;
use crate::dto::Assignment;
use crate::pagination::Paginated;

#[derive(Debug)]
pub struct RolesPageData {
    pub roles: Paginated<Role>,
    /// Choices for the initial privileges of a new role.
    pub privileges: Vec<Privilege>,
}

#[derive(Debug)]
pub struct RolePageData {
    pub role: Role,
    pub privileges: Paginated<Assignment>,
}
