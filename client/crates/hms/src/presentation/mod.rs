//! Presentation Layer
//!
//! Alerts, navigation, the page document model and the bootstrapper that
//! wires document elements to use cases.

pub mod alert;
pub mod bootstrap;
pub mod document;
pub mod navigation;
pub mod render;

pub use alert::{AlertOverlay, ConsolePresenter};
pub use bootstrap::{AppState, BoundPage, PageEvent};
pub use document::{Document, LoginForm, PatientForm, PatientsList, RegisterForm};
pub use navigation::ConsoleNavigator;
