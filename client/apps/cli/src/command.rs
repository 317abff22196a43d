//! Command-line parsing
//!
//! `hms <command> [field=value ...]`. Each command maps onto the page that
//! hosts its form and the event that submits it.

use std::collections::BTreeMap;

use anyhow::{Context, bail};
use hms::PageEvent;
use hms::ports::Page;
use hms::presentation::document::{Document, LoginForm, PatientForm, RegisterForm};

pub const USAGE: &str = "\
Usage: hms <command> [field=value ...]

Commands:
  register     name=.. email=.. password=.. [role=..]
  login        email=.. password=..
  logout
  patients
  add-patient  name=.. [age=..] [phone=..] [gender=..] [address=..]
  whoami
  help";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Register(RegisterForm),
    Login(LoginForm),
    Logout,
    Patients,
    AddPatient(PatientForm),
    WhoAmI,
    Help,
}

impl Command {
    pub fn parse<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let Some(name) = args.next() else {
            return Ok(Command::Help);
        };
        let mut fields = Fields::parse(args)?;

        let command = match name.as_str() {
            "register" => Command::Register(RegisterForm {
                name: fields.take("name"),
                email: fields.take("email"),
                password: fields.take("password"),
                role: fields.take("role"),
            }),
            "login" => Command::Login(LoginForm {
                email: fields.take("email"),
                password: fields.take("password"),
            }),
            "logout" => Command::Logout,
            "patients" => Command::Patients,
            "add-patient" => Command::AddPatient(PatientForm {
                name: fields.take("name"),
                age: fields.take("age"),
                phone: fields.take("phone"),
                gender: fields.take("gender"),
                address: fields.take("address"),
            }),
            "whoami" => Command::WhoAmI,
            "help" | "-h" | "--help" => Command::Help,
            other => bail!("unknown command `{}`\n\n{}", other, USAGE),
        };

        fields.finish(&name)?;
        Ok(command)
    }

    /// Page the command runs on, and the event it fires after loading
    pub fn into_page(self) -> (Document, Option<PageEvent>) {
        match self {
            Command::Register(form) => (
                Document::new(Page::Register).with_register_form(form),
                Some(PageEvent::SubmitRegister),
            ),
            Command::Login(form) => (
                Document::new(Page::Login).with_login_form(form),
                Some(PageEvent::SubmitLogin),
            ),
            Command::Logout => (
                Document::new(Page::Dashboard).with_logout_button(),
                Some(PageEvent::ClickLogout),
            ),
            Command::Patients => (Document::new(Page::Dashboard).with_patients_list(), None),
            Command::AddPatient(form) => (
                Document::new(Page::Dashboard)
                    .with_patient_form(form)
                    .with_patients_list(),
                Some(PageEvent::SubmitPatient),
            ),
            Command::WhoAmI | Command::Help => {
                (Document::new(Page::Home).with_current_user_slot(), None)
            }
        }
    }
}

struct Fields(BTreeMap<String, String>);

impl Fields {
    fn parse(args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let mut fields = BTreeMap::new();
        for arg in args {
            let (key, value) = arg
                .split_once('=')
                .with_context(|| format!("expected field=value, got `{}`", arg))?;
            fields.insert(key.to_string(), value.to_string());
        }
        Ok(Self(fields))
    }

    /// Missing fields read as empty, like an untouched form input
    fn take(&mut self, key: &str) -> String {
        self.0.remove(key).unwrap_or_default()
    }

    fn finish(self, command: &str) -> anyhow::Result<()> {
        if let Some(key) = self.0.keys().next() {
            bail!("`{}` does not take a `{}` field", command, key);
        }
        Ok(())
    }
}
