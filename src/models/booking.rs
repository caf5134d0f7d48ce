use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub nombre: String,
}

/// Ubicación donde se presta un servicio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub direccion: String,
}

/// Cuerpo de `POST /cliente/turnos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub servicio_id: i64,
    pub ubicacion_id: i64,
    /// `YYYY-MM-DD`
    pub fecha: String,
    /// `HH:MM`
    pub hora: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ReservationConfirmation {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub mensaje: Option<String>,
}
