use serde::{Deserialize, Serialize};
use crate::models::auth::{LoginResponse, Role};

/// Identidad del usuario logueado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub token: String,
    pub role: Role,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl Session {
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Self {
            email: response.email,
            token: response.token,
            role: response.rol,
            user_id: response.id,
            display_name: response.nombre,
        }
    }
}
