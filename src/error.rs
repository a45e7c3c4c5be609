// ============================================================================
// ERRORS - Taxonomía de errores de la app
// ============================================================================

use thiserror::Error;

/// Error de una llamada remota
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Fallo de transporte (sin respuesta del servidor)
    #[error("Network error: {0}")]
    Network(String),

    /// 401 o credenciales inválidas
    #[error("{0}")]
    Auth(String),

    /// Respuesta con forma inesperada
    #[error("Invalid response: {0}")]
    Validation(String),

    /// Cualquier otro estado HTTP no exitoso
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
}

impl ApiError {
    /// Clasifica una respuesta HTTP no exitosa
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 => ApiError::Auth(if message.is_empty() {
                "Unauthorized".to_string()
            } else {
                message
            }),
            _ => ApiError::Http { status, message },
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth(_))
    }
}

/// Error del almacenamiento durable (localStorage)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("malformed record under '{key}': {reason}")]
    Malformed { key: String, reason: String },
}
