//! Forms for role creation and role privilege management.

use serde::Deserialize;

use crate::domain::role::NewRole;
use crate::domain::types::{PrivilegeName, RoleName};
use crate::forms::{FormError, selected_values};

#[derive(Debug, Default, Deserialize)]
/// Form data for creating a role with optional initial privileges.
pub struct CreateRoleForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub privileges: Vec<String>,
}

impl CreateRoleForm {
    pub fn from_bytes(body: &[u8]) -> Result<Self, FormError> {
        Ok(serde_html_form::from_bytes(body)?)
    }
}

impl TryFrom<CreateRoleForm> for NewRole {
    type Error = FormError;

    fn try_from(form: CreateRoleForm) -> Result<Self, Self::Error> {
        let privileges = selected_values(form.privileges)
            .iter()
            .map(PrivilegeName::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(NewRole {
            name: RoleName::new(&form.name)?,
            privileges,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
/// Privileges ticked in the "manage privileges" list of a role.
pub struct GrantRolePrivilegesForm {
    #[serde(default)]
    pub privileges: Vec<String>,
}

impl GrantRolePrivilegesForm {
    pub fn from_bytes(body: &[u8]) -> Result<Self, FormError> {
        Ok(serde_html_form::from_bytes(body)?)
    }

    pub fn into_privilege_names(self) -> Result<Vec<PrivilegeName>, FormError> {
        let privileges = selected_values(self.privileges);
        if privileges.is_empty() {
            return Err(FormError::NothingSelected("privilege"));
        }
        privileges
            .iter()
            .map(|p| PrivilegeName::new(p).map_err(FormError::from))
            .collect()
    }
}
