//! HMS (Hospital Management System) Client
//!
//! Clean Architecture structure:
//! - `domain/` - Session and patient models, auth response contract, ports
//! - `application/` - Register, login, logout, list and add patient use cases
//! - `infra/` - HTTP gateway and session persistence
//! - `presentation/` - Alerts, navigation, document model, page bootstrapper
//!
//! ## Features
//! - Registration and login against a JSON REST backend
//! - Bearer-token session persisted in key-value storage
//! - Patient listing (HTML-escaped rendering) and creation
//!
//! ## Error Model
//! - Transport failures and non-success responses surface as `ClientError`
//! - Every flow converts failures into a single error alert; nothing propagates
//!   past the page

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::ClientConfig;
pub use error::{ClientError, ClientResult, RequestError};
pub use infra::http_gateway::HttpGateway;
pub use infra::session_store::SessionStore;
pub use presentation::bootstrap::{AppState, BoundPage, PageEvent};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::auth::*;
    pub use crate::domain::patient::*;
    pub use crate::domain::session::*;
}

pub mod ports {
    pub use crate::domain::ports::*;
}
