//! Forms for privilege definitions and grants.

use serde::Deserialize;
use validator::Validate;

use crate::domain::privilege::{NewPrivilege, PrivilegeGrant, PrivilegeType};
use crate::domain::types::{ObjectName, PrivilegeName, Username};
use crate::forms::{FormError, sanitize};

#[derive(Debug, Deserialize, Validate)]
/// Form data for registering a privilege.
pub struct CreatePrivilegeForm {
    #[validate(length(min = 1, message = "Privilege name is required"))]
    pub name: String,
    #[serde(default)]
    pub privilege_type: PrivilegeType,
    #[serde(default)]
    pub description: String,
}

impl TryFrom<CreatePrivilegeForm> for NewPrivilege {
    type Error = FormError;

    fn try_from(form: CreatePrivilegeForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let description = sanitize(&form.description);

        Ok(NewPrivilege {
            name: PrivilegeName::new(&form.name)?,
            privilege_type: form.privilege_type,
            description: (!description.is_empty()).then_some(description),
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
/// Form data for granting a system or object privilege to an account.
pub struct GrantPrivilegeForm {
    #[serde(default)]
    pub privilege_type: PrivilegeType,
    #[validate(length(min = 1, message = "Privilege name is required"))]
    pub privilege_name: String,
    #[validate(length(min = 1, message = "Grantee is required"))]
    pub grantee: String,
    #[serde(default)]
    pub with_admin_option: bool,
    #[serde(default)]
    pub object_name: String,
}

impl TryFrom<GrantPrivilegeForm> for PrivilegeGrant {
    type Error = FormError;

    fn try_from(form: GrantPrivilegeForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let privilege = PrivilegeName::new(&form.privilege_name)?;
        let grantee = Username::new(&form.grantee)?;

        match form.privilege_type {
            PrivilegeType::System => Ok(PrivilegeGrant::System {
                privilege,
                grantee,
                with_admin_option: form.with_admin_option,
            }),
            PrivilegeType::Object => {
                if form.object_name.trim().is_empty() {
                    return Err(FormError::Invalid(
                        "Object name is required for object privileges".to_string(),
                    ));
                }
                Ok(PrivilegeGrant::Object {
                    privilege,
                    grantee,
                    object: ObjectName::new(&form.object_name)?,
                })
            }
        }
    }
}
