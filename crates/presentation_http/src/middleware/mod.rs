//! HTTP middleware components
//!
//! Request correlation and form validation.

pub mod request_id;
pub mod validation;

pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id};
pub use validation::{ValidatedForm, ValidationError};
