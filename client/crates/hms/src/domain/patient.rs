//! Patient Entity
//!
//! Patient records as listed by `GET /patients`, and the body submitted to
//! `POST /patients`. Records are immutable once created.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{ClientError, ClientResult};

pub const PATIENT_NAME_REQUIRED: &str = "Patient name required";

/// Patient record returned by the backend
///
/// Read leniently: missing fields default, numbers in text fields are
/// stringified, and `age` accepts numbers or numeric strings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Patient {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "lenient_age")]
    pub age: i64,
    #[serde(deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Patient {
    /// Read the patient collection from a `GET /patients` body
    ///
    /// `null` is an empty list. Elements that are not patient objects are
    /// skipped; a body that is not an array yields an empty list.
    pub fn list_from_body(body: &Value) -> Vec<Patient> {
        match body {
            Value::Null => Vec::new(),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .filter_map(|(index, item)| {
                    if !item.is_object() {
                        tracing::warn!(index, "Skipping non-object patient entry");
                        return None;
                    }
                    match serde_json::from_value::<Patient>(item.clone()) {
                        Ok(patient) => Some(patient),
                        Err(e) => {
                            tracing::warn!(index, error = %e, "Skipping malformed patient entry");
                            None
                        }
                    }
                })
                .collect(),
            other => {
                tracing::warn!(body = %other, "Patient list response is not an array");
                Vec::new()
            }
        }
    }
}

/// POST /patients body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPatient {
    pub name: String,
    pub age: i64,
    pub phone: String,
    pub gender: String,
    pub address: String,
}

impl NewPatient {
    /// Validate raw form values
    ///
    /// Name, phone and address are trimmed; gender is kept as selected.
    /// Only the name is required.
    pub fn new(
        name: &str,
        age: &str,
        phone: &str,
        gender: &str,
        address: &str,
    ) -> ClientResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ClientError::Validation(PATIENT_NAME_REQUIRED.into()));
        }

        Ok(Self {
            name: name.to_string(),
            age: parse_age(age),
            phone: phone.trim().to_string(),
            gender: gender.to_string(),
            address: address.trim().to_string(),
        })
    }
}

/// Parse an age the way a form field is read: leading whitespace and an
/// optional sign, then the leading run of digits. No digits yields 0.
pub fn parse_age(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return 0;
    }

    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    if negative { -magnitude } else { magnitude }
}

// ============================================================================
// Lenient field readers
// ============================================================================

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

fn lenient_age<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or_default(),
        Value::String(s) => parse_age(&s),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age("42"), 42);
        assert_eq!(parse_age("  7 years"), 7);
        assert_eq!(parse_age("+3"), 3);
        assert_eq!(parse_age("-5"), -5);
        assert_eq!(parse_age("12.9"), 12);
        assert_eq!(parse_age(""), 0);
        assert_eq!(parse_age("abc"), 0);
        assert_eq!(parse_age("-"), 0);
        assert_eq!(parse_age("99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn test_new_patient_requires_name() {
        let err = NewPatient::new("   ", "30", "", "", "").unwrap_err();
        assert_eq!(err.to_string(), PATIENT_NAME_REQUIRED);
    }

    #[test]
    fn test_new_patient_normalizes_fields() {
        let patient = NewPatient::new(" Jane Doe ", "x", " 555-1234 ", "female", " 1 Main St ").unwrap();
        assert_eq!(
            patient,
            NewPatient {
                name: "Jane Doe".into(),
                age: 0,
                phone: "555-1234".into(),
                gender: "female".into(),
                address: "1 Main St".into(),
            }
        );
        assert_eq!(
            serde_json::to_value(&patient).unwrap(),
            json!({"name": "Jane Doe", "age": 0, "phone": "555-1234", "gender": "female", "address": "1 Main St"})
        );
    }

    #[test]
    fn test_patient_lenient_read() {
        let patient: Patient = serde_json::from_value(json!({
            "name": "Jane",
            "age": "41",
            "phone": 5551234,
            "gender": null,
            "created_at": "2024-03-01T09:30:00Z",
            "_id": "abc"
        }))
        .unwrap();

        assert_eq!(patient.name, "Jane");
        assert_eq!(patient.age, 41);
        assert_eq!(patient.phone.as_deref(), Some("5551234"));
        assert_eq!(patient.gender, None);
        assert_eq!(patient.address, None);
        assert_eq!(patient.created_at.as_deref(), Some("2024-03-01T09:30:00Z"));
    }

    #[test]
    fn test_list_from_body() {
        assert!(Patient::list_from_body(&Value::Null).is_empty());
        assert!(Patient::list_from_body(&json!({"patients": []})).is_empty());

        let list = Patient::list_from_body(&json!([
            {"name": "Jane Doe", "phone": "555-1234"},
            "not a patient",
            {"name": "John", "age": 30.7}
        ]));
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, "Jane Doe");
        assert_eq!(list[1].age, 30);
    }
}
