//! Document Model
//!
//! The elements of a page the client interacts with. An element that is
//! `None` (or `false`) does not exist on the page.

use crate::domain::patient::Patient;
use crate::domain::ports::Page;

/// `registerForm`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// `loginForm`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// `patientForm`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientForm {
    pub name: String,
    pub age: String,
    pub phone: String,
    pub gender: String,
    pub address: String,
}

impl PatientForm {
    /// Restore every field to its initial (empty) value
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// `patientsList`: rendered markup plus the records behind it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientsList {
    pub html: String,
    pub patients: Vec<Patient>,
}

/// One loaded page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub location: Page,
    pub register_form: Option<RegisterForm>,
    pub login_form: Option<LoginForm>,
    pub patient_form: Option<PatientForm>,
    /// `logoutBtn`
    pub logout_button: bool,
    pub patients_list: Option<PatientsList>,
    /// Contents of the `.hms-current-user` placeholders
    pub current_user_slots: Vec<String>,
}

impl Document {
    /// Empty page at `location`
    pub fn new(location: Page) -> Self {
        Self {
            location,
            ..Self::default()
        }
    }

    /// Page with the elements its markup ships with
    pub fn for_page(location: Page) -> Self {
        let doc = Self::new(location);
        match location {
            Page::Home => doc.with_current_user_slot(),
            Page::Register => doc.with_register_form(RegisterForm::default()),
            Page::Login => doc.with_login_form(LoginForm::default()),
            Page::Dashboard => doc
                .with_patient_form(PatientForm::default())
                .with_patients_list()
                .with_logout_button()
                .with_current_user_slot(),
        }
    }

    pub fn with_register_form(mut self, form: RegisterForm) -> Self {
        self.register_form = Some(form);
        self
    }

    pub fn with_login_form(mut self, form: LoginForm) -> Self {
        self.login_form = Some(form);
        self
    }

    pub fn with_patient_form(mut self, form: PatientForm) -> Self {
        self.patient_form = Some(form);
        self
    }

    pub fn with_patients_list(mut self) -> Self {
        self.patients_list = Some(PatientsList::default());
        self
    }

    pub fn with_logout_button(mut self) -> Self {
        self.logout_button = true;
        self
    }

    pub fn with_current_user_slot(mut self) -> Self {
        self.current_user_slots.push(String::new());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_elements() {
        let doc = Document::for_page(Page::Dashboard);
        assert!(doc.patient_form.is_some());
        assert!(doc.patients_list.is_some());
        assert!(doc.logout_button);
        assert_eq!(doc.current_user_slots.len(), 1);
        assert!(doc.register_form.is_none());
        assert!(doc.login_form.is_none());
    }

    #[test]
    fn test_patient_form_reset() {
        let mut form = PatientForm {
            name: "Jane".into(),
            age: "30".into(),
            ..PatientForm::default()
        };
        form.reset();
        assert_eq!(form, PatientForm::default());
    }
}
