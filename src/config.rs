// ============================================================================
// CONFIG - Configuración de la app (resuelta en tiempo de compilación)
// ============================================================================
// build.rs reenvía las variables de .env como rustc-env, aquí se leen con
// option_env! y se parsean con valores por defecto.
// ============================================================================

use crate::utils::constants::{
    DEFAULT_API_URL, DEFAULT_FRIENDS_LIMIT, DEFAULT_LOG_LEVEL, DEFAULT_TOAST_DURATION_MS,
};

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url: String,
    pub toast_duration_ms: u32,
    pub friends_limit: usize,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            friends_limit: DEFAULT_FRIENDS_LIMIT,
            log_level: log::Level::Info,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_URL"),
            option_env!("TOAST_DURATION_MS"),
            option_env!("FRIENDS_LIMIT"),
            option_env!("LOG_LEVEL"),
        )
    }

    fn from_values(
        api_url: Option<&str>,
        toast_duration_ms: Option<&str>,
        friends_limit: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        Self {
            api_url: normalize_base_url(api_url.unwrap_or(DEFAULT_API_URL)),
            toast_duration_ms: toast_duration_ms
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_TOAST_DURATION_MS),
            friends_limit: friends_limit
                .and_then(|v| v.trim().parse().ok())
                .filter(|limit| *limit > 0)
                .unwrap_or(DEFAULT_FRIENDS_LIMIT),
            log_level: log_level
                .unwrap_or(DEFAULT_LOG_LEVEL)
                .parse()
                .unwrap_or(log::Level::Info),
        }
    }
}

/// Quita la barra final para poder concatenar rutas "/auth/v1/..."
fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
