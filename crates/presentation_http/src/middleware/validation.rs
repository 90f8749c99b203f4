//! Request validation
//!
//! Provides a `ValidatedForm` extractor that validates urlencoded form bodies
//! using the validator crate.

use axum::{
    Form, Json,
    extract::{FromRequest, Request, rejection::FormRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Validation error type
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid form: {0}")]
    FormError(#[from] FormRejection),
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::FormError(e) => (e.status(), e.body_text()),
            Self::ValidationFailed(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "code": "validation_error"
        });

        (status, Json(body)).into_response()
    }
}

fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                format!(
                    "{}: {}",
                    field,
                    error
                        .message
                        .as_ref()
                        .map_or_else(|| error.code.to_string(), ToString::to_string)
                )
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

/// A form extractor that also validates the request body
///
/// ```ignore
/// async fn handler(ValidatedForm(form): ValidatedForm<ControlsForm>) {
///     // form is validated
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedForm<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedForm<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state).await?;
        value
            .validate()
            .map_err(|e| ValidationError::ValidationFailed(describe(&e)))?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, body::Body, routing::post};
    use serde::Deserialize;
    use tower::ServiceExt;
    use validator::Validate;

    use super::*;

    #[derive(Debug, Deserialize, Validate)]
    struct TestForm {
        #[validate(range(min = 0.5, max = 2.0, message = "must be between 0.5 and 2.0"))]
        speed: Option<f32>,
    }

    async fn handler(ValidatedForm(form): ValidatedForm<TestForm>) -> String {
        format!("{:?}", form.speed)
    }

    fn app() -> Router {
        Router::new().route("/", post(handler))
    }

    fn form_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn valid_form_passes() {
        let response = app().oneshot(form_request("speed=1.5")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn empty_form_passes() {
        let response = app().oneshot(form_request("")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn out_of_range_is_bad_request() {
        let response = app().oneshot(form_request("speed=4")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unparsable_value_is_rejected() {
        let response = app().oneshot(form_request("speed=fast")).await.unwrap();
        assert!(response.status().is_client_error());
    }
}
