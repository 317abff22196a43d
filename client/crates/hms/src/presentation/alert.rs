//! Alert Presenters
//!
//! [`AlertOverlay`] keeps the stacked overlay of the page in memory;
//! [`ConsolePresenter`] writes alerts to a terminal stream.

use std::io::Write;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use platform::html::escape_html;

use crate::domain::ports::{AlertKind, AlertPresenter};

/// Element id of the overlay container
pub const WRAPPER_ID: &str = "hms-alert-wrapper";

const WRAPPER_STYLE: &str = "position:fixed;top:18px;right:18px;z-index:9999;max-width:320px";

/// One alert currently in the overlay
#[derive(Debug, Clone, PartialEq)]
pub struct AlertNode {
    pub message: String,
    pub kind: AlertKind,
    pub expires_at: Instant,
}

impl AlertNode {
    /// CSS class list, e.g. `hms-alert hms-alert-error`
    pub fn class_name(&self) -> String {
        format!("hms-alert hms-alert-{}", self.kind)
    }

    pub fn style(&self) -> String {
        let background = match self.kind {
            AlertKind::Error => "#f8d7da",
            AlertKind::Success => "#d4edda",
            AlertKind::Info => "#d1ecf1",
        };
        let color = match self.kind {
            AlertKind::Error => "#721c24",
            _ => "#155724",
        };
        format!(
            "background:{};color:{};padding:10px 12px;margin:6px 0;border-radius:6px;\
             box-shadow:0 2px 6px rgba(0,0,0,0.08);font-size:14px",
            background, color
        )
    }

    fn render(&self) -> String {
        format!(
            r#"<div class="{}" style="{}">{}</div>"#,
            self.class_name(),
            self.style(),
            escape_html(&self.message)
        )
    }
}

#[derive(Debug, Default)]
struct OverlayState {
    /// The container is created on the first alert and kept afterwards
    mounted: bool,
    nodes: Vec<AlertNode>,
}

/// In-memory alert overlay
///
/// Nodes are removed once their deadline has passed; removal happens lazily
/// whenever the overlay is read.
#[derive(Debug, Default)]
pub struct AlertOverlay {
    state: Mutex<OverlayState>,
}

impl AlertOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the container element exists yet
    pub fn is_mounted(&self) -> bool {
        self.state.lock().map(|s| s.mounted).unwrap_or(false)
    }

    /// Alerts still on screen, oldest first
    pub fn visible(&self) -> Vec<AlertNode> {
        self.visible_at(Instant::now())
    }

    /// Alerts still on screen at `now`, oldest first
    pub fn visible_at(&self, now: Instant) -> Vec<AlertNode> {
        let Ok(mut state) = self.state.lock() else {
            return Vec::new();
        };
        state.nodes.retain(|node| node.expires_at > now);
        state.nodes.clone()
    }

    /// Markup of the overlay container, `None` before the first alert
    pub fn render_html(&self) -> Option<String> {
        if !self.is_mounted() {
            return None;
        }
        let body: String = self.visible().iter().map(AlertNode::render).collect();
        Some(format!(
            r#"<div id="{}" style="{}">{}</div>"#,
            WRAPPER_ID, WRAPPER_STYLE, body
        ))
    }
}

impl AlertPresenter for AlertOverlay {
    fn show(&self, message: &str, kind: AlertKind, duration: Duration) {
        let Ok(mut state) = self.state.lock() else {
            tracing::warn!(message, "Alert overlay unavailable");
            return;
        };
        state.mounted = true;
        state.nodes.push(AlertNode {
            message: message.to_string(),
            kind,
            expires_at: Instant::now() + duration,
        });
    }
}

/// Writes each alert as one line, e.g. `[error] Login failed`
pub struct ConsolePresenter<W: Write + Send> {
    out: Mutex<W>,
}

impl ConsolePresenter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ConsolePresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> AlertPresenter for ConsolePresenter<W> {
    fn show(&self, message: &str, kind: AlertKind, _duration: Duration) {
        tracing::debug!(kind = %kind, message, "Alert shown");
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        if let Err(e) = writeln!(out, "[{}] {}", kind, message) {
            tracing::warn!(error = %e, "Could not write alert");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_created_lazily() {
        let overlay = AlertOverlay::new();
        assert!(!overlay.is_mounted());
        assert!(overlay.render_html().is_none());

        overlay.show("Hello", AlertKind::Info, Duration::from_secs(4));
        assert!(overlay.is_mounted());
        let html = overlay.render_html().unwrap();
        assert!(html.starts_with(r#"<div id="hms-alert-wrapper" style="position:fixed;top:18px;right:18px;z-index:9999;max-width:320px">"#));
        assert!(html.contains(r#"class="hms-alert hms-alert-info""#));
        assert!(html.contains("background:#d1ecf1;color:#155724"));
    }

    #[test]
    fn test_alerts_stack_in_call_order() {
        let overlay = AlertOverlay::new();
        overlay.show("first", AlertKind::Success, Duration::from_secs(4));
        overlay.show("second", AlertKind::Error, Duration::from_secs(4));

        let visible = overlay.visible();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].message, "first");
        assert_eq!(visible[1].message, "second");
        assert!(visible[1].style().starts_with("background:#f8d7da;color:#721c24"));
    }

    #[test]
    fn test_alert_removed_after_duration() {
        let overlay = AlertOverlay::new();
        let start = Instant::now();
        overlay.show("short", AlertKind::Info, Duration::from_millis(100));
        overlay.show("long", AlertKind::Info, Duration::from_secs(10));

        let later = start + Duration::from_secs(1);
        let visible = overlay.visible_at(later);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].message, "long");

        // the container survives its last alert
        assert!(overlay.visible_at(start + Duration::from_secs(60)).is_empty());
        assert!(overlay.is_mounted());
    }

    #[test]
    fn test_message_is_escaped() {
        let overlay = AlertOverlay::new();
        overlay.show("<b>bold</b>", AlertKind::Error, Duration::from_secs(4));
        let html = overlay.render_html().unwrap();
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_console_presenter_writes_lines() {
        let presenter = ConsolePresenter::new(Vec::new());
        presenter.show("Logged out", AlertKind::Success, Duration::ZERO);
        presenter.show("Login failed", AlertKind::Error, Duration::ZERO);

        let out = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(out, "[success] Logged out\n[error] Login failed\n");
    }
}
