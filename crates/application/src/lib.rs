//! Application layer - Use cases and orchestration
//!
//! Contains the reader workflow (upload, extract, detect, convert), the
//! view model it drives, and the port definitions implemented by
//! infrastructure adapters.

pub mod error;
pub mod ports;
pub mod services;
pub mod session;
pub mod view_model;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
pub use session::Session;
pub use view_model::{LanguageOption, Notice, NoticeLevel, Phase, UiEvent, ViewModel, ViewSnapshot};
