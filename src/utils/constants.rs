/// Clave de localStorage donde se guarda la sesión (único dato persistido)
pub const STORAGE_KEY_SESSION: &str = "turnos_session";

pub const APP_TITLE: &str = "Sistema de Turnos";

pub const MIN_PASSWORD_LENGTH: usize = 6;

pub const LOGIN_ERROR_MESSAGE: &str = "Credenciales incorrectas o error en la conexion.";
pub const REGISTER_SUCCESS_MESSAGE: &str = "Registro exitoso. Por favor inicia sesión.";
pub const REGISTER_SERVER_ERROR_FALLBACK: &str = "Error al registrar el cliente";
pub const REGISTER_ERROR_FALLBACK: &str = "Error al registrar. Intenta nuevamente.";
pub const SERVER_ERROR_FALLBACK: &str = "Ocurrió un error inesperado en el servidor.";
pub const RESERVATION_ERROR_FALLBACK: &str = "No se pudo confirmar el turno. Intenta nuevamente.";
