use serde::{Deserialize, Serialize};

use crate::domain::types::{NamedRef, PrivilegeName, RoleName};
use crate::pagination::Searchable;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Role {
    pub name: String,
    #[serde(default)]
    pub privileges: Vec<NamedRef>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Role {
    pub fn has_privilege(&self, privilege: &str) -> bool {
        self.privileges
            .iter()
            .any(|p| p.as_str().eq_ignore_ascii_case(privilege))
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewRole {
    pub name: RoleName,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub privileges: Vec<PrivilegeName>,
}

impl Searchable for Role {
    fn search_values(&self) -> Vec<String> {
        let mut values = vec![
            self.name.clone(),
            self.privileges
                .iter()
                .map(NamedRef::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        ];
        values.extend(self.description.clone());
        values
    }
}
