use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub legacy_api_url: String,
    pub legacy_route_prefix: String,
    pub environment: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000".to_string(),
            legacy_api_url: "http://localhost:3001".to_string(),
            legacy_route_prefix: "/legacy".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            api_url: option_env!("API_URL")
                .unwrap_or("http://localhost:3000").to_string(),
            legacy_api_url: option_env!("LEGACY_API_URL")
                .unwrap_or("http://localhost:3001").to_string(),
            legacy_route_prefix: option_env!("LEGACY_ROUTE_PREFIX")
                .unwrap_or("/legacy").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
        }
    }

    /// Raíz de API según la ruta de navegación actual: las pantallas bajo el
    /// prefijo legacy siguen hablando con el backend antiguo
    pub fn api_root_for(&self, pathname: &str) -> &str {
        if pathname.starts_with(&self.legacy_route_prefix) {
            &self.legacy_api_url
        } else {
            &self.api_url
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rutas_legacy_usan_el_backend_antiguo() {
        let config = AppConfig::default();
        assert_eq!(config.api_root_for("/legacy/reports/punches"), "http://localhost:3001");
        assert_eq!(config.api_root_for("/legacy"), "http://localhost:3001");
    }

    #[test]
    fn rutas_actuales_usan_el_backend_actual() {
        let config = AppConfig::default();
        assert_eq!(config.api_root_for("/"), "http://localhost:3000");
        assert_eq!(config.api_root_for("/dashboard"), "http://localhost:3000");
        assert_eq!(config.api_root_for(""), "http://localhost:3000");
    }
}
