//! HMS terminal client
//!
//! Runs one page interaction per invocation against the backend. Alerts and
//! page changes are printed to stdout; logs go to stderr.

mod command;

use std::env;
use std::sync::Arc;

use hms::presentation::{ConsoleNavigator, ConsolePresenter};
use hms::{AppState, BoundPage, ClientConfig, HttpGateway, SessionStore};
use platform::html::format_local_timestamp;
use platform::storage::FileStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::command::{Command, USAGE};

const DEFAULT_STORAGE_PATH: &str = ".hms/storage.json";

/// Library and binary share the `hms` tracing target
const DEFAULT_LOG_FILTER: &str = "hms=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = Command::parse(env::args().skip(1))?;
    if command == Command::Help {
        println!("{}", USAGE);
        return Ok(());
    }
    let whoami = command == Command::WhoAmI;

    let config = Arc::new(ClientConfig::from_env());
    let storage_path =
        env::var("HMS_STORAGE_PATH").unwrap_or_else(|_| DEFAULT_STORAGE_PATH.to_string());

    tracing::debug!(
        api_base = %config.api_base,
        storage = %storage_path,
        "Client configured"
    );

    let session = SessionStore::new(Arc::new(FileStore::new(storage_path)));
    let gateway = Arc::new(HttpGateway::new(config.api_base.clone(), session.clone())?);

    let state = AppState {
        gateway,
        session,
        alerts: Arc::new(ConsolePresenter::stdout()),
        navigator: Arc::new(ConsoleNavigator::stdout()),
        config,
    };

    let (document, event) = command.into_page();
    let mut page = BoundPage::boot(document, state).await;
    if let Some(event) = event {
        page.dispatch(event).await;
    }

    let document = page.into_document();

    if let Some(list) = &document.patients_list {
        for patient in &list.patients {
            println!(
                "{}\t{}\t{}",
                patient.name,
                patient.phone.as_deref().unwrap_or("-"),
                patient
                    .created_at
                    .as_deref()
                    .map(format_local_timestamp)
                    .unwrap_or_else(|| "-".to_string()),
            );
        }
    }

    if whoami {
        match document.current_user_slots.first().filter(|s| !s.is_empty()) {
            Some(name) => println!("{}", name),
            None => println!("Not signed in"),
        }
    }

    Ok(())
}
