use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    /// Espera antes de volver al login tras un registro exitoso
    pub register_redirect_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:8080".to_string(),
            backend_url_production: "https://api.turnos.grupo16.com.ar".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            register_redirect_delay_ms: 2000,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_production),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            register_redirect_delay_ms: option_env!("REGISTER_REDIRECT_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.register_redirect_delay_ms),
        }
    }

    /// URL del backend según el entorno actual, sin barra final
    pub fn backend_url(&self) -> &str {
        let url = match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        };
        url.trim_end_matches('/')
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
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
    fn development_is_the_default_environment() {
        let config = AppConfig::default();
        assert_eq!(config.backend_url(), "http://localhost:8080");
        assert_eq!(config.register_redirect_delay_ms, 2000);
    }

    #[test]
    fn production_url_is_used_in_production() {
        let config = AppConfig {
            environment: "production".to_string(),
            backend_url_production: "https://api.example.com/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.backend_url(), "https://api.example.com");
    }

    #[test]
    fn disabled_logging_keeps_only_warnings() {
        let config = AppConfig {
            enable_logging: false,
            ..AppConfig::default()
        };
        assert!(!config.is_logging_enabled());
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
