// Graph API wire types

use serde::Deserialize;

/// Placeholder used when an application has no display name
pub const NO_NAME: &str = "No name provided";

/// An application registration as returned by `/applications`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl Application {
    /// Display name, or the placeholder when the directory has none
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(NO_NAME)
    }
}

/// A password or key credential owned by an application
///
/// Only `endDateTime` matters here; the directory returns more fields
/// (keyId, hint, ...) that this tool ignores.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRecord {
    #[serde(default)]
    pub end_date_time: Option<String>,
}

/// Graph collection envelope: `{"value": [...]}`
#[derive(Debug, Deserialize)]
pub struct CollectionResponse<T> {
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_name_placeholder() {
        let app: Application = serde_json::from_str(r#"{"id": "abc-123"}"#).unwrap();
        assert_eq!(app.name(), "No name provided");
    }

    #[test]
    fn test_application_display_name() {
        let app: Application =
            serde_json::from_str(r#"{"id": "abc-123", "displayName": "Payroll API"}"#).unwrap();
        assert_eq!(app.name(), "Payroll API");
    }

    #[test]
    fn test_collection_response_missing_value() {
        let collection: CollectionResponse<Application> = serde_json::from_str("{}").unwrap();
        assert!(collection.value.is_empty());
    }

    #[test]
    fn test_credential_record_extra_fields_ignored() {
        let record: CredentialRecord = serde_json::from_str(
            r#"{"keyId": "k1", "endDateTime": "2026-09-15T10:30:00Z", "hint": "abc"}"#,
        )
        .unwrap();
        assert_eq!(record.end_date_time.as_deref(), Some("2026-09-15T10:30:00Z"));
    }

    #[test]
    fn test_credential_record_null_end_date() {
        let record: CredentialRecord = serde_json::from_str(r#"{"endDateTime": null}"#).unwrap();
        assert!(record.end_date_time.is_none());
    }
}
