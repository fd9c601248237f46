//! Permission models for the BIM 360 Docs `permissions` endpoint.

use serde::{Deserialize, Serialize};

/// A subject's granted and inherited action sets on one folder.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PermissionRecord {
    /// Subject display name
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// USER, ROLE or COMPANY
    #[serde(default)]
    pub subject_type: String,
    #[serde(default)]
    pub user_type: String,
    #[serde(default)]
    pub subject_status: String,
    #[serde(default)]
    pub actions: Vec<String>,
    #[serde(default)]
    pub inherit_actions: Vec<String>,
}

/// Payload of `GET .../folders/{id}/permissions`.
///
/// The endpoint has been observed both as a bare array and wrapped in a
/// `data` envelope; accept either shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PermissionsPayload {
    Envelope { data: Vec<PermissionRecord> },
    Bare(Vec<PermissionRecord>),
}

impl PermissionsPayload {
    /// Unwrap into the record list.
    pub fn into_records(self) -> Vec<PermissionRecord> {
        match self {
            PermissionsPayload::Envelope { data } => data,
            PermissionsPayload::Bare(records) => records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{
        "name": "Jane Roe",
        "email": "jane@example.com",
        "subjectType": "USER",
        "userType": "PROJECT_ADMIN",
        "subjectStatus": "ACTIVE",
        "actions": ["VIEW", "DOWNLOAD"],
        "inheritActions": ["VIEW"]
    }"#;

    #[test]
    fn test_parse_record_camel_case() {
        let record: PermissionRecord = serde_json::from_str(RECORD).unwrap();
        assert_eq!(record.name, "Jane Roe");
        assert_eq!(record.subject_type, "USER");
        assert_eq!(record.user_type, "PROJECT_ADMIN");
        assert_eq!(record.subject_status, "ACTIVE");
        assert_eq!(record.actions, vec!["VIEW", "DOWNLOAD"]);
        assert_eq!(record.inherit_actions, vec!["VIEW"]);
    }

    #[test]
    fn test_missing_fields_default() {
        let record: PermissionRecord = serde_json::from_str(r#"{"name": "Ops"}"#).unwrap();
        assert_eq!(record.name, "Ops");
        assert!(record.email.is_empty());
        assert!(record.actions.is_empty());
        assert!(record.inherit_actions.is_empty());
    }

    #[test]
    fn test_payload_envelope_and_bare() {
        let enveloped: PermissionsPayload =
            serde_json::from_str(&format!(r#"{{"data": [{}]}}"#, RECORD)).unwrap();
        assert_eq!(enveloped.into_records().len(), 1);

        let bare: PermissionsPayload = serde_json::from_str(&format!("[{}]", RECORD)).unwrap();
        assert_eq!(bare.into_records().len(), 1);
    }
}
