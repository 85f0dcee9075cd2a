//! DTOs used by the user management pages.

use crate::domain::user::User;
use crate::dto::Assignment;
use crate::pagination::Paginated;

#[derive(Debug)]
pub struct UsersPageData {
    pub users: Paginated<User>,
}

/// Data required to render the edit page of a single account.
#[derive(Debug)]
pub struct UserPageData {
    pub user: User,
    /// Every role known to the database, flagged when the user holds it.
    pub roles: Paginated<Assignment>,
}
