//! Add Patient Use Case
//!
//! Validates the patient form and submits it. Refreshing the list afterwards
//! is left to the caller.

use std::sync::Arc;

use serde_json::Value;

use crate::application::alert_failure;
use crate::application::config::ClientConfig;
use crate::application::list_patients::PATIENTS_PATH;
use crate::domain::patient::NewPatient;
use crate::domain::ports::{AlertKind, AlertPresenter, Gateway, RequestOptions};
use crate::error::ClientResult;

pub const PATIENT_ADDED: &str = "Patient added";
pub const ADD_FAILED_PREFIX: &str = "Could not add patient: ";

/// Add patient input (raw form values)
#[derive(Debug, Clone, Default)]
pub struct AddPatientInput {
    pub name: String,
    pub age: String,
    pub phone: String,
    pub gender: String,
    pub address: String,
}

/// Add patient use case
pub struct AddPatientUseCase<G>
where
    G: Gateway,
{
    gateway: Arc<G>,
    alerts: Arc<dyn AlertPresenter>,
    config: Arc<ClientConfig>,
}

impl<G> AddPatientUseCase<G>
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

    /// Submit the patient; returns the backend's response body
    pub async fn execute(&self, input: AddPatientInput) -> ClientResult<Value> {
        let result = self.add(input).await;
        if let Err(e) = &result {
            alert_failure(
                self.alerts.as_ref(),
                &self.config,
                "add_patient",
                e,
                Some(ADD_FAILED_PREFIX),
                "",
            );
        }
        result
    }

    async fn add(&self, input: AddPatientInput) -> ClientResult<Value> {
        let patient = NewPatient::new(
            &input.name,
            &input.age,
            &input.phone,
            &input.gender,
            &input.address,
        )?;

        let created = self
            .gateway
            .request(PATIENTS_PATH, RequestOptions::post_json(&patient)?)
            .await?;

        tracing::info!(name = %patient.name, age = patient.age, "Patient added");

        self.alerts
            .show(PATIENT_ADDED, AlertKind::Success, self.config.alert_duration);

        Ok(created)
    }
}
