use crate::domain::privilege::Privilege;
use crate::pagination::Paginated;

#[derive(Debug)]
pub struct PrivilegesPageData {
    pub privileges: Paginated<Privilege>,
    /// Account names offered as grantees.
    pub usernames: Vec<String>,
}
