//! List Patients Use Case

use std::sync::Arc;

use crate::application::alert_failure;
use crate::application::config::ClientConfig;
use crate::domain::patient::Patient;
use crate::domain::ports::{AlertPresenter, Gateway, RequestOptions};
use crate::error::ClientResult;

pub const PATIENTS_PATH: &str = "/patients";
pub const LOAD_FAILED_PREFIX: &str = "Could not load patients: ";

/// Fetch the patient collection
pub struct ListPatientsUseCase<G>
where
    G: Gateway,
{
    gateway: Arc<G>,
    alerts: Arc<dyn AlertPresenter>,
    config: Arc<ClientConfig>,
}

impl<G> ListPatientsUseCase<G>
where
    G: Gateway,
{
    pub fn new(gateway: Arc<G>, alerts: Arc<dyn AlertPresenter>, config: Arc<ClientConfig>) -> Self {
        Self {
            gateway,
            alerts,
            config,
        }
    }

    /// Fetch patients; a failure is alerted and returned
    pub async fn execute(&self) -> ClientResult<Vec<Patient>> {
        let result = self.gateway.request(PATIENTS_PATH, RequestOptions::get()).await;

        match result {
            Ok(body) => {
                let patients = Patient::list_from_body(&body);
                tracing::debug!(count = patients.len(), "Patients loaded");
                Ok(patients)
            }
            Err(e) => {
                alert_failure(
                    self.alerts.as_ref(),
                    &self.config,
                    "list_patients",
                    &e,
                    Some(LOAD_FAILED_PREFIX),
                    "",
                );
                Err(e)
            }
        }
    }
}
