//! Account models.
//!
//! [`User`] is the full record the API serves; [`store::SessionUser`] is the
//! client-safe projection cached in local storage between page loads.
//! [`User::to_session`] converts one into the other.

use serde::{Deserialize, Serialize};
use store::SessionUser;

/// Account role as served by the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Role {
    #[serde(rename = "USER")]
    #[default]
    User,
    #[serde(rename = "ADMIN")]
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }

    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// A platform account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Free-form date string as the API stores it.
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub gender: bool,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl User {
    /// Projection cached in the session store.
    pub fn to_session(&self) -> SessionUser {
        SessionUser {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.as_str().to_string(),
        }
    }
}

/// Payload for registration and admin user creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub gender: bool,
    #[serde(default)]
    pub role: Role,
}

/// Credentials for `sign_in`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Sign-in answer: the account plus its bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignInResponse {
    pub user: User,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        assert_eq!(serde_json::to_value(Role::Admin).unwrap(), "ADMIN");
        let role: Role = serde_json::from_str("\"USER\"").unwrap();
        assert_eq!(role, Role::User);
    }

    #[test]
    fn test_session_projection() {
        let user = User {
            id: 7,
            name: "Lan Pham".to_string(),
            email: "lan@example.com".to_string(),
            phone: Some("0912345678".to_string()),
            birthday: None,
            gender: true,
            role: Role::Admin,
            avatar: None,
        };
        let session = user.to_session();
        assert_eq!(session.id, 7);
        assert!(session.is_admin());
    }

    #[test]
    fn test_missing_role_defaults_to_user() {
        let body = r#"{"id":1,"name":"A","email":"a@example.com"}"#;
        let user: User = serde_json::from_str(body).unwrap();
        assert_eq!(user.role, Role::User);
    }
}
