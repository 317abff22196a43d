//! Patient list rendering

use platform::html::{escape_html, format_local_timestamp};

use crate::domain::patient::Patient;

pub const EMPTY_PATIENTS_HTML: &str = "<p>No patients found.</p>";

/// Markup for `patientsList`
///
/// Every backend-supplied value is escaped.
pub fn render_patients(patients: &[Patient]) -> String {
    if patients.is_empty() {
        return EMPTY_PATIENTS_HTML.to_string();
    }

    let items: String = patients.iter().map(render_patient).collect();
    format!(r#"<ul class="list-group">{}</ul>"#, items)
}

fn render_patient(patient: &Patient) -> String {
    let created = patient
        .created_at
        .as_deref()
        .map(format_local_timestamp)
        .unwrap_or_default();

    format!(
        concat!(
            r#"<li class="list-group-item d-flex justify-content-between align-items-center">"#,
            r#"<div><strong>{}</strong><div class="text-muted">{}</div></div>"#,
            r#"<div class="text-muted small">{}</div>"#,
            "</li>"
        ),
        escape_html(&patient.name),
        escape_html(patient.phone.as_deref().unwrap_or_default()),
        escape_html(&created),
    )
}
