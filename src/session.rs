use crate::error::SessionError;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// What the login flow leaves behind on disk.
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub is_guest: bool,
}

impl Session {
    /// # Errors
    ///
    /// Returns `SessionError` if the file cannot be read or is not valid session JSON.
    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Guests browse without credentials, and a token with no user is stale.
    #[must_use]
    pub fn bearer_token(&self) -> Option<&str> {
        if self.is_guest || self.user.is_none() {
            return None;
        }
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_session_has_no_token() {
        let session: Session =
            serde_json::from_str(r#"{"token": "abc", "isGuest": true}"#).unwrap();
        assert_eq!(session.bearer_token(), None);
    }

    #[test]
    fn logged_in_session_yields_token() {
        let session: Session = serde_json::from_str(
            r#"{"token": "abc",
                "user": {"id": "u1", "email": "a@b.c", "firstName": "A", "lastName": "B"}}"#,
        )
        .unwrap();
        assert_eq!(session.bearer_token(), Some("abc"));
    }
}
