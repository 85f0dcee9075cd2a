//! Data Guard configuration form.

use std::fmt;

use serde::Deserialize;
use validator::Validate;

use crate::domain::ha::DataGuardConfig;
use crate::forms::FormError;

pub const DEFAULT_LISTENER_PORT: u32 = 1521;

fn default_port() -> u32 {
    DEFAULT_LISTENER_PORT
}

#[derive(Deserialize, Validate)]
pub struct DataGuardConfigForm {
    #[validate(length(min = 1, message = "Primary host is required"))]
    pub primary_host: String,
    #[serde(default = "default_port")]
    #[validate(range(min = 1, max = 65535, message = "Primary port must be between 1 and 65535"))]
    pub primary_port: u32,
    #[validate(length(min = 1, message = "Standby host is required"))]
    pub standby_host: String,
    #[serde(default = "default_port")]
    #[validate(range(min = 1, max = 65535, message = "Standby port must be between 1 and 65535"))]
    pub standby_port: u32,
    #[validate(length(min = 1, message = "SYSDBA username is required"))]
    pub sysdba_username: String,
    #[validate(length(min = 1, message = "SYSDBA password is required"))]
    pub sysdba_password: String,
    #[validate(length(min = 1, message = "Primary database name is required"))]
    pub primary_db_name: String,
    #[validate(length(min = 1, message = "Standby database name is required"))]
    pub standby_db_name: String,
}

impl fmt::Debug for DataGuardConfigForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataGuardConfigForm")
            .field("primary_host", &self.primary_host)
            .field("primary_port", &self.primary_port)
            .field("standby_host", &self.standby_host)
            .field("standby_port", &self.standby_port)
            .field("sysdba_username", &self.sysdba_username)
            .finish_non_exhaustive()
    }
}

fn port(value: u32) -> Result<u16, FormError> {
    u16::try_from(value).map_err(|_| FormError::Invalid(format!("invalid port: {value}")))
}

impl TryFrom<DataGuardConfigForm> for DataGuardConfig {
    type Error = FormError;

    fn try_from(form: DataGuardConfigForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(DataGuardConfig {
            primary_host: form.primary_host.trim().to_string(),
            primary_port: port(form.primary_port)?,
            standby_host: form.standby_host.trim().to_string(),
            standby_port: port(form.standby_port)?,
            sysdba_username: form.sysdba_username.trim().to_string(),
            sysdba_password: form.sysdba_password,
            primary_db_name: form.primary_db_name.trim().to_string(),
            standby_db_name: form.standby_db_name.trim().to_string(),
        })
    }
}
