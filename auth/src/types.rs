use serde::{Deserialize, Serialize};

/// Snapshot of the form fields taken at submission time.
///
/// Constructed when the user submits and discarded once the attempt
/// resolves; never stored anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_credentials_snake_case_fields() {
        let credentials = Credentials::new("steve", "12345");
        let v = serde_json::to_value(&credentials).unwrap();
        assert_eq!(v["username"], serde_json::json!("steve"));
        assert_eq!(v["password"], serde_json::json!("12345"));
    }

    #[test]
    fn deserialize_credentials() {
        let raw = r#"{"username":"bob","password":"hunter2"}"#;
        let credentials: Credentials = serde_json::from_str(raw).unwrap();
        assert_eq!(credentials.username, "bob");
        assert_eq!(credentials.password, "hunter2");
    }
}
