use serde::{Deserialize, Deserializer, Serialize};

/// Perfil del usuario autenticado (snapshot de solo lectura)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "Points", default)]
    pub points: u64,
}

impl UserProfile {
    /// Nombre a mostrar: firstName o, si está vacío, el username
    pub fn display_name(&self) -> &str {
        if self.first_name.is_empty() {
            &self.username
        } else {
            &self.first_name
        }
    }
}

/// El perfil llega desnudo (login/register) o envuelto en `{ success, data }`
/// (get-users-info-id). Ambas formas terminan en el mismo `UserProfile`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum UserPayload {
    Wrapped { data: UserProfile },
    Bare(UserProfile),
}

impl From<UserPayload> for UserProfile {
    fn from(payload: UserPayload) -> Self {
        match payload {
            UserPayload::Wrapped { data } => data,
            UserPayload::Bare(profile) => profile,
        }
    }
}

pub fn deserialize_profile<'de, D>(deserializer: D) -> Result<UserProfile, D::Error>
where
    D: Deserializer<'de>,
{
    UserPayload::deserialize(deserializer).map(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn alice() -> serde_json::Value {
        json!({
            "_id": "65f0",
            "firstName": "Alice",
            "username": "alice",
            "email": "alice@example.com",
            "Points": 120
        })
    }

    #[test]
    fn bare_and_wrapped_payloads_yield_same_profile() {
        let bare: UserProfile = serde_json::from_value::<UserPayload>(alice()).unwrap().into();
        let wrapped: UserProfile =
            serde_json::from_value::<UserPayload>(json!({ "success": true, "data": alice() }))
                .unwrap()
                .into();
        assert_eq!(bare, wrapped);
        assert_eq!(bare.first_name, "Alice");
        assert_eq!(bare.points, 120);
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let profile: UserProfile =
            serde_json::from_value(json!({ "_id": "1", "username": "bob" })).unwrap();
        assert_eq!(profile.display_name(), "bob");
        assert_eq!(profile.points, 0);
    }
}
