// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo arma requests y traduce respuestas
// ============================================================================

use chrono::NaiveDate;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::booking::calendar::{format_date, MonthKey};
use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{
    Location, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
    ReservationConfirmation, ReservationRequest, Service,
};

/// Cliente API - SOLO comunicación HTTP
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Cliente anónimo (login y registro)
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url().to_string(),
            token: None,
        }
    }

    /// Cliente que envía `Authorization: Bearer <token>`
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::new()
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(response).await
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> Result<Response, ApiError> {
        self.authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        decode(self.post(path, body).await?).await
    }

    /// Igual que `post_json` pero acepta un cuerpo vacío como respuesta
    async fn post_ack<T: DeserializeOwned + Default>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let response = self.post(path, body).await?;
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        if !(200..300).contains(&status) {
            return Err(ApiError::from_response(status, &text));
        }
        if text.trim().is_empty() {
            return Ok(T::default());
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        log::info!("🔐 Login para: {}", request.email);
        self.post_json("/auth/login", request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        log::info!("📝 Registro de cliente: {}", request.email);
        self.post_ack("/auth/register", request).await
    }

    pub async fn get_services(&self) -> Result<Vec<Service>, ApiError> {
        self.get_json("/cliente/servicios").await
    }

    pub async fn get_locations(&self, service_id: i64) -> Result<Vec<Location>, ApiError> {
        self.get_json(&format!("/cliente/ubicaciones?servicioId={}", service_id))
            .await
    }

    /// Fechas con disponibilidad para el mes visible
    pub async fn get_available_dates(
        &self,
        service_id: i64,
        month: MonthKey,
    ) -> Result<Vec<NaiveDate>, ApiError> {
        let raw: Vec<String> = self
            .get_json(&format!(
                "/cliente/fechas-disponibles?servicioId={}&mes={}",
                service_id, month
            ))
            .await?;
        raw.iter()
            .map(|d| {
                NaiveDate::parse_from_str(d, "%Y-%m-%d")
                    .map_err(|e| ApiError::Parse(format!("fecha '{}': {}", d, e)))
            })
            .collect()
    }

    pub async fn get_available_slots(
        &self,
        service_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<String>, ApiError> {
        self.get_json(&format!(
            "/cliente/horarios-disponibles?servicioId={}&fecha={}",
            service_id,
            format_date(date)
        ))
        .await
    }

    pub async fn create_reservation(
        &self,
        request: &ReservationRequest,
    ) -> Result<ReservationConfirmation, ApiError> {
        log::info!(
            "📅 Reservando turno: servicio {} ubicación {} {} {}",
            request.servicio_id,
            request.ubicacion_id,
            request.fecha,
            request.hora
        );
        self.post_ack("/cliente/turnos", request).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_response(status, &body));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}
