use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{BackendTimestamp, NamedRef, Username};
use crate::pagination::Searchable;

/// Database account as reported by the management API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub account_locked: bool,
    #[serde(default)]
    pub roles: Vec<NamedRef>,
    #[serde(default)]
    pub default_tablespace: Option<String>,
    #[serde(default)]
    pub temporary_tablespace: Option<String>,
    #[serde(default)]
    pub quota_limit: Option<String>,
    #[serde(default)]
    pub password_expiry_date: Option<BackendTimestamp>,
    #[serde(default)]
    pub failed_login_attempts: Option<u32>,
    #[serde(default)]
    pub created_at: Option<BackendTimestamp>,
    #[serde(default)]
    pub last_login: Option<BackendTimestamp>,
}

impl User {
    /// Human readable account status.
    pub fn status(&self) -> &'static str {
        if self.account_locked { "Locked" } else { "Active" }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r.as_str().eq_ignore_ascii_case(role))
    }
}

/// Payload creating a new database account.
#[derive(Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: Username,
    pub password: String,
    pub default_tablespace: String,
    pub temporary_tablespace: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_limit: Option<String>,
    pub account_locked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_expiry_date: Option<NaiveDate>,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("password", &"***")
            .field("default_tablespace", &self.default_tablespace)
            .field("temporary_tablespace", &self.temporary_tablespace)
            .field("quota_limit", &self.quota_limit)
            .field("account_locked", &self.account_locked)
            .field("password_expiry_date", &self.password_expiry_date)
            .finish()
    }
}

/// Changes applied to an existing account. Absent fields stay untouched.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_tablespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporary_tablespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_limit: Option<String>,
    pub account_locked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_expiry_date: Option<NaiveDate>,
}

impl Searchable for User {
    fn search_values(&self) -> Vec<String> {
        let mut values = vec![
            self.username.clone(),
            self.status().to_string(),
            self.roles
                .iter()
                .map(NamedRef::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        ];
        values.extend(
            [
                &self.default_tablespace,
                &self.temporary_tablespace,
                &self.quota_limit,
            ]
            .into_iter()
            .flatten()
            .cloned(),
        );
        values.extend(self.failed_login_attempts.map(|n| n.to_string()));
        values
    }
}
