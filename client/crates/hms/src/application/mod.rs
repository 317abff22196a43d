//! Application Layer
//!
//! Use cases and application services.

pub mod add_patient;
pub mod config;
pub mod list_patients;
pub mod login;
pub mod logout;
pub mod register;

// Re-exports
pub use add_patient::{AddPatientInput, AddPatientUseCase};
pub use config::ClientConfig;
pub use list_patients::ListPatientsUseCase;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use logout::LogoutUseCase;
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};

use crate::domain::ports::{AlertKind, AlertPresenter};
use crate::error::ClientError;

/// Report a failed flow and raise its error alert
///
/// Validation messages are shown as-is; other failures get `prefix` when one
/// is given. An empty message is replaced by `fallback`.
pub(crate) fn alert_failure(
    alerts: &dyn AlertPresenter,
    config: &ClientConfig,
    context: &str,
    err: &ClientError,
    prefix: Option<&str>,
    fallback: &str,
) {
    err.report(context);

    let message = err.to_string();
    let message = if message.is_empty() {
        fallback.to_string()
    } else {
        message
    };

    let message = match (err, prefix) {
        (ClientError::Validation(_), _) | (_, None) => message,
        (_, Some(prefix)) => format!("{}{}", prefix, message),
    };

    alerts.show(&message, AlertKind::Error, config.alert_duration);
}
