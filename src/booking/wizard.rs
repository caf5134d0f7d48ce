// ============================================================================
// WIZARD DE RESERVA - Máquina de estados explícita
// ============================================================================
// El paso visible se deriva SIEMPRE del borrador: es el primer paso cuyo
// campo requerido falta. Las vistas solo emiten selecciones o "volver".
// ============================================================================

use chrono::NaiveDate;

use super::calendar::format_date;
use crate::models::{Location, ReservationRequest, Service};

/// Turno en construcción
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReservationDraft {
    pub service: Option<Service>,
    pub location: Option<Location>,
    pub date: Option<NaiveDate>,
    /// `HH:MM`
    pub time: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    SelectingService,
    SelectingLocation,
    SelectingDate,
    SelectingTime,
    Confirming,
    /// Turno enviado y aceptado; `derive_step` nunca lo devuelve
    Done,
}

impl WizardStep {
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::SelectingService => "Servicios disponibles",
            WizardStep::SelectingLocation => "Ubicaciones disponibles",
            WizardStep::SelectingDate => "Selecciona una fecha",
            WizardStep::SelectingTime => "Horarios disponibles",
            WizardStep::Confirming => "Confirmar turno",
            WizardStep::Done => "Turno confirmado",
        }
    }
}

/// Resultado de pedir "volver" en el wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    /// Se limpió un campo y el wizard retrocedió un paso
    Stepped(WizardStep),
    /// Ya estaba en el primer paso: hay que salir del wizard
    LeaveWizard,
}

pub fn derive_step(draft: &ReservationDraft) -> WizardStep {
    if draft.service.is_none() {
        WizardStep::SelectingService
    } else if draft.location.is_none() {
        WizardStep::SelectingLocation
    } else if draft.date.is_none() {
        WizardStep::SelectingDate
    } else if draft.time.is_none() {
        WizardStep::SelectingTime
    } else {
        WizardStep::Confirming
    }
}

impl ReservationDraft {
    pub fn step(&self) -> WizardStep {
        derive_step(self)
    }

    /// Cambiar de servicio invalida todo lo que dependía de él
    pub fn select_service(&mut self, service: Service) {
        log::info!("✅ Servicio seleccionado: {}", service.nombre);
        self.service = Some(service);
        self.location = None;
        self.date = None;
        self.time = None;
    }

    pub fn select_location(&mut self, location: Location) {
        log::info!("✅ Ubicación seleccionada: {}", location.direccion);
        self.location = Some(location);
        self.date = None;
        self.time = None;
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        log::info!("✅ Fecha seleccionada: {}", date);
        self.date = Some(date);
        self.time = None;
    }

    pub fn select_time(&mut self, time: String) {
        log::info!("✅ Horario seleccionado: {}", time);
        self.time = Some(time);
    }

    /// Limpia solo el campo que habilitó el paso actual
    pub fn go_back(&mut self) -> BackOutcome {
        match self.step() {
            WizardStep::SelectingService | WizardStep::Done => return BackOutcome::LeaveWizard,
            WizardStep::SelectingLocation => self.service = None,
            WizardStep::SelectingDate => self.location = None,
            WizardStep::SelectingTime => self.date = None,
            WizardStep::Confirming => self.time = None,
        }
        BackOutcome::Stepped(self.step())
    }

    /// `None` mientras falte algún campo
    pub fn to_request(&self) -> Option<ReservationRequest> {
        Some(ReservationRequest {
            servicio_id: self.service.as_ref()?.id,
            ubicacion_id: self.location.as_ref()?.id,
            fecha: format_date(self.date?),
            hora: self.time.clone()?,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(id: i64) -> Service {
        Service { id, nombre: format!("Servicio {}", id) }
    }

    fn location(id: i64) -> Location {
        Location { id, direccion: format!("Calle {}", id) }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 11, 3).unwrap()
    }

    fn full_draft() -> ReservationDraft {
        ReservationDraft {
            service: Some(service(1)),
            location: Some(location(10)),
            date: Some(date()),
            time: Some("09:30".to_string()),
        }
    }

    #[test]
    fn empty_draft_starts_at_service_selection() {
        assert_eq!(derive_step(&ReservationDraft::default()), WizardStep::SelectingService);
    }

    #[test]
    fn step_is_the_first_unset_field() {
        let mut draft = ReservationDraft { service: Some(service(1)), ..Default::default() };
        assert_eq!(draft.step(), WizardStep::SelectingLocation);

        draft.location = Some(location(10));
        assert_eq!(draft.step(), WizardStep::SelectingDate);

        draft.date = Some(date());
        assert_eq!(draft.step(), WizardStep::SelectingTime);

        draft.time = Some("10:00".into());
        assert_eq!(draft.step(), WizardStep::Confirming);
    }

    #[test]
    fn downstream_fields_never_skip_a_missing_prerequisite() {
        // Fecha y hora cargadas pero sin ubicación: sigue en ubicaciones
        let draft = ReservationDraft {
            service: Some(service(1)),
            location: None,
            date: Some(date()),
            time: Some("09:30".into()),
        };
        assert_eq!(draft.step(), WizardStep::SelectingLocation);
        assert_eq!(draft.to_request(), None);
    }

    #[test]
    fn back_from_time_selection_only_clears_the_date() {
        let mut draft = ReservationDraft {
            service: Some(service(1)),
            location: Some(location(10)),
            date: Some(date()),
            time: None,
        };
        assert_eq!(draft.go_back(), BackOutcome::Stepped(WizardStep::SelectingDate));
        assert_eq!(draft.service, Some(service(1)));
        assert_eq!(draft.location, Some(location(10)));
        assert_eq!(draft.date, None);
    }

    #[test]
    fn back_walks_the_steps_in_reverse() {
        let mut draft = full_draft();
        assert_eq!(draft.go_back(), BackOutcome::Stepped(WizardStep::SelectingTime));
        assert_eq!(draft.go_back(), BackOutcome::Stepped(WizardStep::SelectingDate));
        assert_eq!(draft.go_back(), BackOutcome::Stepped(WizardStep::SelectingLocation));
        assert_eq!(draft.go_back(), BackOutcome::Stepped(WizardStep::SelectingService));
        assert_eq!(draft.go_back(), BackOutcome::LeaveWizard);
        assert_eq!(draft, ReservationDraft::default());
    }

    #[test]
    fn changing_service_discards_location_and_later_fields() {
        let mut draft = full_draft();
        draft.select_service(service(2));
        assert_eq!(draft.service, Some(service(2)));
        assert_eq!(draft.location, None);
        assert_eq!(draft.date, None);
        assert_eq!(draft.time, None);
        assert_eq!(draft.step(), WizardStep::SelectingLocation);
    }

    #[test]
    fn selecting_a_date_clears_a_previous_time() {
        let mut draft = full_draft();
        draft.select_date(NaiveDate::from_ymd_opt(2026, 11, 4).unwrap());
        assert_eq!(draft.time, None);
        assert_eq!(draft.step(), WizardStep::SelectingTime);
    }

    #[test]
    fn complete_draft_builds_the_request_and_reset_empties_it() {
        let mut draft = full_draft();
        let request = draft.to_request().unwrap();
        assert_eq!(request.servicio_id, 1);
        assert_eq!(request.ubicacion_id, 10);
        assert_eq!(request.fecha, "2026-11-03");
        assert_eq!(request.hora, "09:30");

        draft.reset();
        assert_eq!(draft.step(), WizardStep::SelectingService);
    }

    #[test]
    fn reservation_request_uses_camel_case_on_the_wire() {
        let json = serde_json::to_value(full_draft().to_request().unwrap()).unwrap();
        assert_eq!(json["servicioId"], 1);
        assert_eq!(json["ubicacionId"], 10);
    }
}
