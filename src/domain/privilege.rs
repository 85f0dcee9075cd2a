use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::types::{ObjectName, PrivilegeName, Username};
use crate::pagination::Searchable;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum PrivilegeType {
    #[default]
    System,
    Object,
}

impl Display for PrivilegeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PrivilegeType::System => write!(f, "SYSTEM"),
            PrivilegeType::Object => write!(f, "OBJECT"),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Privilege {
    pub name: String,
    #[serde(rename = "type", default)]
    pub privilege_type: PrivilegeType,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewPrivilege {
    pub name: PrivilegeName,
    #[serde(rename = "type")]
    pub privilege_type: PrivilegeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Grant of a privilege to a user or role.
#[derive(Clone, Debug, PartialEq)]
pub enum PrivilegeGrant {
    System {
        privilege: PrivilegeName,
        grantee: Username,
        with_admin_option: bool,
    },
    Object {
        privilege: PrivilegeName,
        grantee: Username,
        object: ObjectName,
    },
}

impl PrivilegeGrant {
    pub fn privilege_type(&self) -> PrivilegeType {
        match self {
            PrivilegeGrant::System { .. } => PrivilegeType::System,
            PrivilegeGrant::Object { .. } => PrivilegeType::Object,
        }
    }

    /// Parameters sent as an urlencoded form body.
    pub fn form_params(&self) -> Vec<(&'static str, String)> {
        match self {
            PrivilegeGrant::System {
                privilege,
                grantee,
                with_admin_option,
            } => vec![
                ("privilegeName", privilege.to_string()),
                ("userName", grantee.to_string()),
                ("withAdminOption", with_admin_option.to_string()),
            ],
            PrivilegeGrant::Object {
                privilege,
                grantee,
                object,
            } => vec![
                ("privilegeName", privilege.to_string()),
                ("userName", grantee.to_string()),
                ("objectName", object.to_string()),
            ],
        }
    }
}

impl Searchable for Privilege {
    fn search_values(&self) -> Vec<String> {
        let mut values = vec![self.name.clone(), self.privilege_type.to_string()];
        values.extend(self.description.clone());
        values
    }
}
