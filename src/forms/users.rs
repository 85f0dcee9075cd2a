//! Forms for creating, editing and granting roles to database accounts.

use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::types::{RoleName, Username};
use crate::domain::user::{NewUser, UpdateUser};
use crate::forms::{FormError, non_blank, parse_optional_date, selected_values};

pub const DEFAULT_TABLESPACE: &str = "USERS";
pub const DEFAULT_TEMPORARY_TABLESPACE: &str = "TEMP";

fn default_tablespace() -> String {
    DEFAULT_TABLESPACE.to_string()
}

fn default_temporary_tablespace() -> String {
    DEFAULT_TEMPORARY_TABLESPACE.to_string()
}

/// Requires an upper-case letter, a lower-case letter, a digit and a symbol.
fn validate_password_complexity(password: &str) -> Result<(), ValidationError> {
    let complex = password.chars().any(|c| c.is_uppercase())
        && password.chars().any(|c| c.is_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace());

    if complex {
        Ok(())
    } else {
        Err(ValidationError::new("password_complexity").with_message(Cow::Borrowed(
            "Password must contain upper-case and lower-case letters, a digit and a special character",
        )))
    }
}

#[derive(Deserialize, Validate)]
/// Form data for creating a database account.
pub struct CreateUserForm {
    #[validate(length(
        min = 1,
        max = 30,
        message = "Username must be between 1 and 30 characters"
    ))]
    pub username: String,
    #[validate(
        length(min = 8, message = "Password must be at least 8 characters"),
        custom(function = "validate_password_complexity")
    )]
    pub password: String,
    #[serde(default = "default_tablespace")]
    #[validate(length(min = 1, message = "Default tablespace is required"))]
    pub default_tablespace: String,
    #[serde(default = "default_temporary_tablespace")]
    #[validate(length(min = 1, message = "Temporary tablespace is required"))]
    pub temporary_tablespace: String,
    #[serde(default)]
    pub quota_limit: String,
    #[serde(default)]
    pub account_locked: bool,
    /// `YYYY-MM-DD` or blank.
    #[serde(default)]
    pub password_expiry_date: String,
}

impl TryFrom<CreateUserForm> for NewUser {
    type Error = FormError;

    fn try_from(form: CreateUserForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(NewUser {
            username: Username::new(&form.username)?,
            password: form.password,
            default_tablespace: form.default_tablespace.trim().to_string(),
            temporary_tablespace: form.temporary_tablespace.trim().to_string(),
            quota_limit: non_blank(&form.quota_limit),
            account_locked: form.account_locked,
            password_expiry_date: parse_optional_date(&form.password_expiry_date)?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
/// Form data for editing an existing account. Blank fields are left unchanged.
pub struct EditUserForm {
    #[serde(default)]
    pub default_tablespace: String,
    #[serde(default)]
    pub temporary_tablespace: String,
    #[serde(default)]
    pub quota_limit: String,
    #[serde(default)]
    pub account_locked: bool,
    #[serde(default)]
    pub password_expiry_date: String,
}

impl TryFrom<EditUserForm> for UpdateUser {
    type Error = FormError;

    fn try_from(form: EditUserForm) -> Result<Self, Self::Error> {
        Ok(UpdateUser {
            default_tablespace: non_blank(&form.default_tablespace),
            temporary_tablespace: non_blank(&form.temporary_tablespace),
            quota_limit: non_blank(&form.quota_limit),
            account_locked: form.account_locked,
            password_expiry_date: parse_optional_date(&form.password_expiry_date)?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
/// Roles ticked in the "manage roles" list. Parsed from the raw body because
/// the checkbox name repeats.
pub struct GrantRolesForm {
    #[serde(default)]
    pub roles: Vec<String>,
}

impl GrantRolesForm {
    pub fn from_bytes(body: &[u8]) -> Result<Self, FormError> {
        Ok(serde_html_form::from_bytes(body)?)
    }

    pub fn into_role_names(self) -> Result<Vec<RoleName>, FormError> {
        let roles = selected_values(self.roles);
        if roles.is_empty() {
            return Err(FormError::NothingSelected("role"));
        }
        roles
            .iter()
            .map(|role| RoleName::new(role).map_err(FormError::from))
            .collect()
    }
}
