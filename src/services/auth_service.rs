use crate::error::{ApiError, SubmitFailure};
use crate::models::{LoginRequest, RegisterRequest, RegisterResponse, Session};
use crate::services::api_client::ApiClient;
use crate::utils::{REGISTER_ERROR_FALLBACK, REGISTER_SERVER_ERROR_FALLBACK};

/// Login contra el backend; devuelve la sesión lista para guardar
pub async fn perform_login(request: &LoginRequest) -> Result<Session, ApiError> {
    let response = ApiClient::new().login(request).await?;
    log::info!("✅ Login exitoso: {} ({})", response.email, response.rol);
    Ok(Session::from(response))
}

pub async fn register_client(request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
    let response = ApiClient::new().register(request).await?;
    log::info!(
        "✅ Cliente registrado: {}",
        response.email.as_deref().unwrap_or(&request.email)
    );
    Ok(response)
}

pub fn classify_register_error(error: &ApiError) -> SubmitFailure {
    SubmitFailure::classify(error, REGISTER_SERVER_ERROR_FALLBACK, REGISTER_ERROR_FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_500_uses_fallback_when_server_sends_no_message() {
        let err = ApiError::Http { status: 500, message: String::new() };
        assert_eq!(
            classify_register_error(&err),
            SubmitFailure::ServerErrorPage("Error al registrar el cliente".to_string())
        );
    }

    #[test]
    fn register_conflict_is_shown_inline() {
        let err = ApiError::Http { status: 400, message: String::new() };
        assert_eq!(
            classify_register_error(&err),
            SubmitFailure::Inline("Error al registrar. Intenta nuevamente.".to_string())
        );
    }
}
