use serde::Deserialize;

/// Request body for creating or replacing a client. Updates are full
/// replaces: optional fields left out are cleared, not preserved.
#[derive(Debug, Deserialize)]
pub struct ClientPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl ClientPayload {
    /// Trimmed name, if one was supplied and is non-empty.
    pub fn trimmed_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed_name_rejects_blank() {
        let payload: ClientPayload = serde_json::from_str(r#"{"name": "  "}"#).unwrap();
        assert_eq!(payload.trimmed_name(), None);

        let payload: ClientPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.trimmed_name(), None);
    }

    #[test]
    fn trimmed_name_strips_whitespace() {
        let payload: ClientPayload =
            serde_json::from_str(r#"{"name": " Cliente X "}"#).unwrap();
        assert_eq!(payload.trimmed_name(), Some("Cliente X"));
    }

    #[test]
    fn optional_fields_default_to_none() {
        let payload: ClientPayload = serde_json::from_str(r#"{"name": "X"}"#).unwrap();
        assert!(payload.email.is_none());
        assert!(payload.phone.is_none());
        assert!(payload.address.is_none());
    }
}
