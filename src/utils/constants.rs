/// URL base de la API cuando no se define API_URL
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

pub const DEFAULT_TOAST_DURATION_MS: u32 = 2000;
pub const DEFAULT_FRIENDS_LIMIT: usize = 10;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Clave única del registro de sesión en localStorage
pub const STORAGE_KEY_SESSION: &str = "user";

/// Tamaño del podio (top 3)
pub const PODIUM_SIZE: usize = 3;

/// Factor de conversión puntos → premio mostrado en la cabecera diaria
pub const PRIZE_RATE: f64 = 0.75;
