//! Page workflows coordinating forms, the backend client and list views.

use thiserror::Error;

use crate::backend::errors::BackendError;

pub mod dashboard;
pub mod ha;
pub mod optimization;
pub mod performance;
pub mod privileges;
pub mod rman;
pub mod roles;
pub mod security;
pub mod users;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("backend error: {0}")]
    Backend(BackendError),

    #[error("{0}")]
    Form(String),

    #[error("not found")]
    NotFound,

    #[error("type constraint violation: {0}")]
    TypeConstraint(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// Text to append to an operator-facing failure notification.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ServiceError::Backend(err) => err.detail(),
            ServiceError::Form(message) | ServiceError::TypeConstraint(message) => {
                Some(message.as_str())
            }
            ServiceError::NotFound => None,
        }
    }

    /// Builds a notification such as `Failed to lock user: ORA-01031`.
    pub fn user_message(&self, summary: &str) -> String {
        match self.detail() {
            Some(detail) => format!("{summary}: {detail}"),
            None => summary.to_string(),
        }
    }
}

impl From<BackendError> for ServiceError {
    fn from(err: BackendError) -> Self {
        if err.is_not_found() {
            ServiceError::NotFound
        } else {
            ServiceError::Backend(err)
        }
    }
}
