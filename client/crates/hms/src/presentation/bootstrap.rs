//! Page Bootstrapper
//!
//! Binds the elements present on a [`Document`] to their use cases, runs the
//! initial patient fetch, fills the current-user placeholders, and then
//! handles one [`PageEvent`] at a time.

use std::sync::Arc;

use platform::storage::KeyValueStore;

use crate::application::{
    AddPatientInput, AddPatientUseCase, ClientConfig, ListPatientsUseCase, LoginInput,
    LoginUseCase, LogoutUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::ports::{AlertPresenter, Gateway, Navigator};
use crate::infra::session_store::SessionStore;
use crate::presentation::document::Document;
use crate::presentation::render::render_patients;

/// Shared dependencies of every page
pub struct AppState<G, S>
where
    G: Gateway,
    S: KeyValueStore,
{
    pub gateway: Arc<G>,
    pub session: SessionStore<S>,
    pub alerts: Arc<dyn AlertPresenter>,
    pub navigator: Arc<dyn Navigator>,
    pub config: Arc<ClientConfig>,
}

impl<G, S> Clone for AppState<G, S>
where
    G: Gateway,
    S: KeyValueStore,
{
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            session: self.session.clone(),
            alerts: Arc::clone(&self.alerts),
            navigator: Arc::clone(&self.navigator),
            config: Arc::clone(&self.config),
        }
    }
}

/// User interactions a page can receive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    SubmitRegister,
    SubmitLogin,
    SubmitPatient,
    ClickLogout,
}

/// A document with its handlers bound
pub struct BoundPage<G, S>
where
    G: Gateway,
    S: KeyValueStore,
{
    document: Document,
    register: Option<RegisterUseCase<G, S>>,
    login: Option<LoginUseCase<G, S>>,
    logout: Option<LogoutUseCase<S>>,
    add_patient: Option<AddPatientUseCase<G>>,
    list_patients: Option<ListPatientsUseCase<G>>,
}

impl<G, S> BoundPage<G, S>
where
    G: Gateway,
    S: KeyValueStore,
{
    /// Bind handlers and run the page-load work
    pub async fn boot(document: Document, state: AppState<G, S>) -> Self {
        let AppState {
            gateway,
            session,
            alerts,
            navigator,
            config,
        } = state;

        let register = document.register_form.as_ref().map(|_| {
            RegisterUseCase::new(
                Arc::clone(&gateway),
                session.clone(),
                Arc::clone(&alerts),
                Arc::clone(&navigator),
                Arc::clone(&config),
            )
        });
        let login = document.login_form.as_ref().map(|_| {
            LoginUseCase::new(
                Arc::clone(&gateway),
                session.clone(),
                Arc::clone(&alerts),
                Arc::clone(&navigator),
                Arc::clone(&config),
            )
        });
        let logout = document.logout_button.then(|| {
            LogoutUseCase::new(
                session.clone(),
                Arc::clone(&alerts),
                Arc::clone(&navigator),
                Arc::clone(&config),
            )
        });
        let add_patient = document.patient_form.as_ref().map(|_| {
            AddPatientUseCase::new(Arc::clone(&gateway), Arc::clone(&alerts), Arc::clone(&config))
        });
        let list_patients = document.patients_list.as_ref().map(|_| {
            ListPatientsUseCase::new(Arc::clone(&gateway), Arc::clone(&alerts), Arc::clone(&config))
        });

        tracing::debug!(
            page = %document.location,
            register = register.is_some(),
            login = login.is_some(),
            logout = logout.is_some(),
            add_patient = add_patient.is_some(),
            list_patients = list_patients.is_some(),
            "Page bound"
        );

        let mut page = Self {
            document,
            register,
            login,
            logout,
            add_patient,
            list_patients,
        };

        page.refresh_patients().await;

        if let Some(user) = session.user() {
            let display = user.display_name();
            for slot in &mut page.document.current_user_slots {
                *slot = display.to_string();
            }
        }

        page
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Handle one event; returns `false` when the page has no element bound
    /// to it
    pub async fn dispatch(&mut self, event: PageEvent) -> bool {
        match event {
            PageEvent::SubmitRegister => self.submit_register().await,
            PageEvent::SubmitLogin => self.submit_login().await,
            PageEvent::SubmitPatient => self.submit_patient().await,
            PageEvent::ClickLogout => match &self.logout {
                Some(logout) => {
                    logout.execute();
                    true
                }
                None => false,
            },
        }
    }

    async fn submit_register(&mut self) -> bool {
        let (Some(use_case), Some(form)) = (&self.register, &self.document.register_form) else {
            return false;
        };
        let input = RegisterInput {
            name: form.name.clone(),
            email: form.email.clone(),
            password: form.password.clone(),
            role: form.role.clone(),
            current_page: self.document.location,
        };
        // failures are already alerted
        let _ = use_case.execute(input).await;
        true
    }

    async fn submit_login(&mut self) -> bool {
        let (Some(use_case), Some(form)) = (&self.login, &self.document.login_form) else {
            return false;
        };
        let input = LoginInput {
            email: form.email.clone(),
            password: form.password.clone(),
        };
        let _ = use_case.execute(input).await;
        true
    }

    async fn submit_patient(&mut self) -> bool {
        let (Some(use_case), Some(form)) = (&self.add_patient, &self.document.patient_form) else {
            return false;
        };
        let input = AddPatientInput {
            name: form.name.clone(),
            age: form.age.clone(),
            phone: form.phone.clone(),
            gender: form.gender.clone(),
            address: form.address.clone(),
        };

        if use_case.execute(input).await.is_ok() {
            if let Some(form) = self.document.patient_form.as_mut() {
                form.reset();
            }
            self.refresh_patients().await;
        }
        true
    }

    /// Re-fetch and render the patient list; on failure the current content
    /// stays as it is
    async fn refresh_patients(&mut self) {
        let Some(use_case) = &self.list_patients else {
            return;
        };
        let Ok(patients) = use_case.execute().await else {
            return;
        };
        if let Some(list) = self.document.patients_list.as_mut() {
            list.html = render_patients(&patients);
            list.patients = patients;
        }
    }
}

