//! Form - Profile Form Values

use serde::{Deserialize, Serialize};

use crate::domain::hobbies::{FirstEntryPolicy, HobbyList};

/// Current values of the profile form
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub username: String,
    pub email: String,
    pub password: String,
    pub hobbies: HobbyList,
}

impl FormState {
    /// Create an empty form with one blank hobby
    pub fn new(policy: FirstEntryPolicy) -> Self {
        Self {
            hobbies: HobbyList::new(policy),
            ..Default::default()
        }
    }

    /// Owned copy of the values for submission
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            hobbies: self
                .hobbies
                .iter()
                .map(|entry| HobbySnapshot {
                    name: entry.name.clone(),
                })
                .collect(),
        }
    }
}

/// Submitted form payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub username: String,
    pub email: String,
    pub password: String,
    pub hobbies: Vec<HobbySnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HobbySnapshot {
    pub name: String,
}

impl FormSnapshot {
    /// Copy with the password masked, for logging
    pub fn redacted(&self) -> Self {
        Self {
            password: "********".to_string(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_is_empty() {
        let form = FormState::default();
        assert!(form.username.is_empty());
        assert!(form.email.is_empty());
        assert!(form.password.is_empty());
        assert_eq!(form.hobbies.len(), 1);
    }

    #[test]
    fn test_snapshot_serializes_in_order() {
        let mut form = FormState::new(FirstEntryPolicy::Pinned);
        form.username = "ab".into();
        form.email = "a@b.com".into();
        form.password = "12345678".into();
        form.hobbies.set_name(0, "chess").expect("set name");
        form.hobbies.append();
        form.hobbies.set_name(1, "go").expect("set name");

        let json = serde_json::to_value(form.snapshot()).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "username": "ab",
                "email": "a@b.com",
                "password": "12345678",
                "hobbies": [{ "name": "chess" }, { "name": "go" }],
            })
        );
    }

    #[test]
    fn test_redacted_masks_password_only() {
        let mut form = FormState::default();
        form.username = "ab".into();
        form.password = "secret-password".into();

        let redacted = form.snapshot().redacted();
        assert_eq!(redacted.username, "ab");
        assert_eq!(redacted.password, "********");
    }
}
