//! Terminal navigation

use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;

use crate::domain::ports::{Navigator, Page};

/// Announces page changes on a terminal stream and remembers the last one
pub struct ConsoleNavigator<W: Write + Send> {
    out: Mutex<W>,
    last: Mutex<Option<Page>>,
}

impl ConsoleNavigator<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleNavigator<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            last: Mutex::new(None),
        }
    }

    /// Most recent destination
    pub fn destination(&self) -> Option<Page> {
        self.last.lock().ok().and_then(|last| *last)
    }
}

impl<W: Write + Send> Navigator for ConsoleNavigator<W> {
    fn navigate(&self, to: Page, after: Duration) {
        tracing::debug!(page = %to, delay_ms = after.as_millis() as u64, "Navigating");

        if let Ok(mut last) = self.last.lock() {
            *last = Some(to);
        }
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        if let Err(e) = writeln!(out, "-> {}", to) {
            tracing::warn!(error = %e, "Could not write navigation");
        }
    }
}
