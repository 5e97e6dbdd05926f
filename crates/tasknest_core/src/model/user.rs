//! Account and session records.

use serde::{Deserialize, Serialize};

/// One registered account, keyed by `email` inside the `users` map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub name: String,
    /// Normalized unique key.
    pub email: String,
    /// Output of `auth::digest::password_digest`; never the raw password.
    pub password_digest: String,
}

impl UserRecord {
    /// Session payload issued when this account logs in.
    pub fn session_payload(&self) -> SessionPayload {
        SessionPayload {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Identity held in a session slot while a user is logged in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPayload {
    pub name: String,
    pub email: String,
}

impl SessionPayload {
    /// Name as shown in greetings: first character uppercased, rest untouched.
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SessionPayload, UserRecord};

    #[test]
    fn user_record_uses_camel_case_digest_field() {
        let record = UserRecord {
            name: "ann".to_string(),
            email: "ann@x.com".to_string(),
            password_digest: "abc".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["passwordDigest"], "abc");
        assert_eq!(record.session_payload().email, "ann@x.com");
    }

    #[test]
    fn display_name_capitalizes_first_letter_only() {
        let payload = SessionPayload {
            name: "élodie mARTIN".to_string(),
            email: "e@x.com".to_string(),
        };
        assert_eq!(payload.display_name(), "Élodie mARTIN");

        let empty = SessionPayload {
            name: String::new(),
            email: "e@x.com".to_string(),
        };
        assert_eq!(empty.display_name(), "");
    }
}
