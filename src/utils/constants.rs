/// Claves de localStorage para la sesión
pub const STORAGE_KEY_AUTH_TOKEN: &str = "authToken";
pub const STORAGE_KEY_REFRESH_TOKEN: &str = "refresh_token";
pub const STORAGE_KEY_COMPANY_ID: &str = "company_id";

/// Flag de conveniencia: último teléfono usado en el login
pub const STORAGE_KEY_REMEMBERED_PHONE: &str = "remembered_phone";

/// Punto de entrada al que se redirige al expirar la sesión
pub const LOGIN_PATH: &str = "/login";
