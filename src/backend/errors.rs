use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

pub type BackendResult<T> = Result<T, BackendError>;

impl BackendError {
    /// Response body text worth showing to the operator, if the backend sent any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            BackendError::Status { body, .. } if !body.trim().is_empty() => Some(body.trim()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, BackendError::Status { status: 404, .. })
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            BackendError::Decode(err.to_string())
        } else if err.is_builder() {
            BackendError::InvalidRequest(err.to_string())
        } else {
            BackendError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        BackendError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_only_for_non_empty_bodies() {
        let err = BackendError::Status {
            status: 500,
            body: " ORA-01031: insufficient privileges\n".to_string(),
        };
        assert_eq!(err.detail(), Some("ORA-01031: insufficient privileges"));

        let err = BackendError::Status {
            status: 500,
            body: String::new(),
        };
        assert_eq!(err.detail(), None);
        assert_eq!(BackendError::Network("refused".into()).detail(), None);
    }

    #[test]
    fn not_found_detection() {
        let err = BackendError::Status {
            status: 404,
            body: String::new(),
        };
        assert!(err.is_not_found());
        assert!(!BackendError::Decode("eof".into()).is_not_found());
    }
}
