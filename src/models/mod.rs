pub mod auth;
pub mod booking;
pub mod session;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, Role};
pub use booking::{Location, ReservationConfirmation, ReservationRequest, Service};
pub use session::Session;

/// Mensaje que viaja en el estado del historial al navegar
/// (banner de éxito en Login, detalle en ServerError)
#[derive(Debug, Clone, PartialEq)]
pub struct NavMessage {
    pub message: String,
}

impl NavMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
