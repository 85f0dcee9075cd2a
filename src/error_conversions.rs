//! Error conversion glue between the value-object layer and the service and
//! backend layers.
//!
//! The domain types only depend on the `data` feature, so the conversions live
//! here instead of next to [`TypeConstraintError`].

use crate::backend::errors::BackendError;
use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<TypeConstraintError> for BackendError {
    fn from(val: TypeConstraintError) -> Self {
        BackendError::InvalidRequest(val.to_string())
    }
}

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
