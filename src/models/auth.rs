use serde::{Deserialize, Serialize};

/// Rol devuelto por el backend en el login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Cliente,
    /// Cualquier otro valor: nunca pasa un guard
    Unknown(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "ADMIN",
            Role::Cliente => "CLIENTE",
            Role::Unknown(raw) => raw,
        }
    }

    /// Coincidencia exacta: "admin" o " ADMIN " son `Unknown`
    pub fn parse(raw: &str) -> Self {
        match raw {
            "ADMIN" => Role::Admin,
            "CLIENTE" | "CLIENT" => Role::Cliente,
            _ => Role::Unknown(raw.to_string()),
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        Role::parse(&raw)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
    pub email: String,
    pub rol: Role,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub nombre: Option<String>,
}

/// Cuerpo de `POST /auth/register`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub password: String,
    pub telefono: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct RegisterResponse {
    #[serde(default)]
    pub mensaje: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_parse_from_backend_strings() {
        assert_eq!(Role::parse("ADMIN"), Role::Admin);
        assert_eq!(Role::parse("CLIENTE"), Role::Cliente);
        assert_eq!(Role::parse("CLIENT"), Role::Cliente);
        assert_eq!(Role::parse("EMPLEADO"), Role::Unknown("EMPLEADO".to_string()));
    }

    #[test]
    fn role_names_are_case_and_whitespace_sensitive() {
        assert_eq!(Role::parse("admin"), Role::Unknown("admin".to_string()));
        assert_eq!(Role::parse(" ADMIN "), Role::Unknown(" ADMIN ".to_string()));
        assert_eq!(Role::parse("Cliente"), Role::Unknown("Cliente".to_string()));
        assert_eq!(Role::parse("client"), Role::Unknown("client".to_string()));
    }

    #[test]
    fn login_response_decodes_role() {
        let json = r#"{"token":"jwt","email":"a@b.com","rol":"ADMIN","id":7,"nombre":"Ana Díaz"}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.rol, Role::Admin);
        assert_eq!(response.id, Some(7));

        let json = r#"{"token":"jwt","email":"c@d.com","rol":"CLIENTE"}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.rol, Role::Cliente);
        assert_eq!(response.nombre, None);
    }

    #[test]
    fn role_serializes_back_to_its_wire_name() {
        assert_eq!(serde_json::to_string(&Role::Cliente).unwrap(), "\"CLIENTE\"");
        assert_eq!(serde_json::to_string(&Role::Unknown("X".into())).unwrap(), "\"X\"");
    }
}
