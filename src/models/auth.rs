use serde::{Deserialize, Serialize};

use super::user::{deserialize_profile, UserPayload, UserProfile};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterData {
    #[serde(rename = "firstName")]
    pub first_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Respuesta de login/register: `{ token, user }`
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserPayload>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Registro persistido en localStorage bajo la clave "user"
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct StoredSession {
    pub token: String,
    #[serde(deserialize_with = "deserialize_profile")]
    pub user: UserProfile,
}

/// Estado de autenticación visible para los componentes
#[derive(Clone, PartialEq, Debug)]
pub struct Session {
    pub user: Option<UserProfile>,
    pub token: Option<String>,
    pub loading: bool,
}

impl Session {
    /// Estado inicial, antes de leer el storage
    pub fn pending() -> Self {
        Self {
            user: None,
            token: None,
            loading: true,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            user: None,
            token: None,
            loading: false,
        }
    }

    pub fn authenticated(stored: StoredSession) -> Self {
        Self {
            user: Some(stored.user),
            token: Some(stored.token),
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::pending()
    }
}
