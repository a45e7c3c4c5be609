// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP
// ============================================================================
// Único punto de salida hacia la API. El token se lee del storage justo antes
// de cada request (nunca se cachea), así un logout/login entre llamadas se
// respeta. Sin reintentos.
// ============================================================================

use gloo_net::http::{Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{
    ApiEnvelope, AuthResponse, LoginCredentials, RegisterData, UserPayload, UserProfile,
};
use crate::services::traits::{AuthApi, LeaderboardApi};
use crate::utils::{KeyValueStore, SharedStorage, STORAGE_KEY_SESSION};

/// Cliente API - stateless salvo la URL base y el acceso al storage
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    storage: SharedStorage,
}

#[derive(Serialize)]
struct UsernameRequest<'a> {
    username: &'a str,
}

impl ApiClient {
    pub fn new(storage: SharedStorage) -> Self {
        Self::with_base_url(CONFIG.api_url.clone(), storage)
    }

    pub fn with_base_url(base_url: impl Into<String>, storage: SharedStorage) -> Self {
        Self {
            base_url: base_url.into(),
            storage,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = RequestBuilder::new(&self.url(path))
            .method(method)
            .header("Content-Type", "application/json");
        match authorization_header(self.storage.as_ref()) {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    async fn send_empty(&self, method: Method, path: &str) -> Result<Response, ApiError> {
        let response = self
            .builder(method, path)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(response).await
    }

    async fn send_json<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        let request = self
            .builder(method, path)
            .json(body)
            .map_err(|e| ApiError::Validation(format!("Serialization error: {}", e)))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(response).await
    }
}

/// Valor de la cabecera Authorization a partir del registro de sesión guardado
pub fn authorization_header(storage: &dyn KeyValueStore) -> Option<String> {
    let record = storage.load_value(STORAGE_KEY_SESSION).ok()??;
    let token = record.get("token")?.as_str()?;
    if token.is_empty() {
        None
    } else {
        Some(format!("Bearer {}", token))
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, error_message(&body, &status_text)))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Validation(format!("Parse error: {}", e)))
}

/// Mensaje legible de un cuerpo de error: `message`/`error` si es JSON,
/// el texto si es corto, o el status text.
pub fn error_message(body: &str, status_text: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        for key in ["message", "error"] {
            if let Some(Value::String(message)) = map.get(key) {
                if !message.is_empty() {
                    return message.clone();
                }
            }
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() && trimmed.len() <= 200 && !trimmed.starts_with('<') {
        return trimmed.to_string();
    }
    status_text.to_string()
}

impl AuthApi for ApiClient {
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, ApiError> {
        log::info!("🔐 Login para usuario: {}", credentials.username);
        let response = self.send_json(Method::POST, "/auth/v1/login", credentials).await?;
        decode(response).await
    }

    async fn register(&self, data: &RegisterData) -> Result<AuthResponse, ApiError> {
        log::info!("📝 Registro de usuario: {}", data.username);
        let response = self.send_json(Method::POST, "/auth/v1/register", data).await?;
        decode(response).await
    }

    async fn get_user_info(&self) -> Result<UserProfile, ApiError> {
        let response = self.send_empty(Method::GET, "/auth/v1/get-users-info-id").await?;
        decode::<UserPayload>(response).await.map(Into::into)
    }
}

impl LeaderboardApi for ApiClient {
    async fn get_users(&self) -> Result<ApiEnvelope, ApiError> {
        let response = self.send_empty(Method::GET, "/user/v1/get-users").await?;
        decode(response).await
    }

    async fn get_user_history(&self, username: &str) -> Result<ApiEnvelope, ApiError> {
        let response = self
            .send_json(Method::POST, "/user/v1/your-history", &UsernameRequest { username })
            .await?;
        decode(response).await
    }

    async fn claim_points(&self, username: &str) -> Result<(), ApiError> {
        log::info!("🎁 Reclamando puntos para: {}", username);
        let response = self
            .send_json(Method::PATCH, "/user/v1/claim-points", &UsernameRequest { username })
            .await?;
        // El cuerpo no se usa: cualquier 2xx es éxito
        let _ = response.text().await;
        Ok(())
    }

    async fn get_today_history(&self) -> Result<ApiEnvelope, ApiError> {
        let response = self.send_empty(Method::GET, "/user/v1/your-daily-history").await?;
        decode(response).await
    }

    async fn get_weekly_data(&self) -> Result<ApiEnvelope, ApiError> {
        let response = self.send_empty(Method::GET, "/user/v1/your-weekly-history").await?;
        decode(response).await
    }

    async fn get_monthly_data(&self) -> Result<ApiEnvelope, ApiError> {
        let response = self.send_empty(Method::GET, "/user/v1/your-monthly-history").await?;
        decode(response).await
    }
}
