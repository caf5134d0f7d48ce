// ============================================================================
// ERRORES DE API
// ============================================================================

use serde::Deserialize;
use thiserror::Error;

/// Error de cualquier llamada al backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 5xx: se escala a la página de error del servidor
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(status) if (500..600).contains(&status))
    }

    /// Mensaje enviado por el servidor (`mensaje`), si lo hubo
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// Construye el error a partir de una respuesta no exitosa.
    /// El cuerpo se interpreta como `ErrorBody`; si no lo es, se descarta.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.mensaje)
            .unwrap_or_default();
        ApiError::Http { status, message }
    }
}

/// Cómo se muestra al usuario un envío fallido (registro, reserva)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitFailure {
    /// 5xx: navegar a `/server-error` con este mensaje
    ServerErrorPage(String),
    /// Cualquier otro error: mensaje en línea, el formulario conserva los datos
    Inline(String),
}

impl SubmitFailure {
    pub fn classify(error: &ApiError, page_fallback: &str, inline_fallback: &str) -> Self {
        if error.is_server_error() {
            SubmitFailure::ServerErrorPage(
                error.server_message().unwrap_or(page_fallback).to_string(),
            )
        } else {
            SubmitFailure::Inline(error.server_message().unwrap_or(inline_fallback).to_string())
        }
    }
}

/// Cuerpo de error del backend
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub estado: Option<u16>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub mensaje: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_5xx_only() {
        assert!(ApiError::Http { status: 500, message: String::new() }.is_server_error());
        assert!(ApiError::Http { status: 503, message: String::new() }.is_server_error());
        assert!(!ApiError::Http { status: 409, message: String::new() }.is_server_error());
        assert!(!ApiError::Network("offline".into()).is_server_error());
    }

    #[test]
    fn message_is_taken_from_mensaje_field() {
        let body = r#"{"estado":409,"error":"Conflict","mensaje":"El email ya está registrado","path":"/api/auth/register"}"#;
        let err = ApiError::from_response(409, body);
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.server_message(), Some("El email ya está registrado"));
    }

    #[test]
    fn server_failures_go_to_the_error_page_with_the_server_message() {
        let err = ApiError::from_response(500, r#"{"mensaje":"Base de datos caída"}"#);
        assert_eq!(
            SubmitFailure::classify(&err, "pagina", "inline"),
            SubmitFailure::ServerErrorPage("Base de datos caída".to_string())
        );

        let err = ApiError::from_response(500, "");
        assert_eq!(
            SubmitFailure::classify(&err, "pagina", "inline"),
            SubmitFailure::ServerErrorPage("pagina".to_string())
        );
    }

    #[test]
    fn other_failures_stay_inline() {
        let err = ApiError::from_response(409, r#"{"mensaje":"El email ya está registrado"}"#);
        assert_eq!(
            SubmitFailure::classify(&err, "pagina", "inline"),
            SubmitFailure::Inline("El email ya está registrado".to_string())
        );
        assert_eq!(
            SubmitFailure::classify(&ApiError::Network("timeout".into()), "pagina", "inline"),
            SubmitFailure::Inline("inline".to_string())
        );
    }

    #[test]
    fn non_json_body_yields_no_message() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert!(err.is_server_error());
        assert_eq!(err.server_message(), None);
    }
}
