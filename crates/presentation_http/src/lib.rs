//! EduVision HTTP presentation layer
//!
//! Serves the reader page, its form actions, the audio endpoints and a JSON
//! rendering of the view model.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::{RequestId, ValidatedForm, ValidationError};
pub use routes::create_router;
pub use state::AppState;
