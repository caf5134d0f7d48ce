// ============================================================================
// RESERVA DE TURNO - Wizard paso a paso
// ============================================================================
// Servicio → Ubicación → Fecha → Horario → Confirmación → Listo
// El paso visible sale de `derive_step(&draft)`; cada vista solo emite
// una selección o un "volver".
// ============================================================================

use chrono::NaiveDate;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::booking::{derive_step, BackOutcome, ReservationDraft, WizardStep};
use crate::components::{Calendar, ConfirmReservation, LocationsList, ServicesList, SlotsList};
use crate::hooks::use_document_title;
use crate::models::{Location, Service};
use crate::routes::ClienteRoute;

const STEPS: [WizardStep; 5] = [
    WizardStep::SelectingService,
    WizardStep::SelectingLocation,
    WizardStep::SelectingDate,
    WizardStep::SelectingTime,
    WizardStep::Confirming,
];

#[function_component(BookingWizard)]
pub fn booking_wizard() -> Html {
    use_document_title("Reservar turno");
    let draft = use_state(ReservationDraft::default);
    let done = use_state(|| false);
    let navigator = use_navigator();

    let go_to_menu = {
        let navigator = navigator.clone();
        Callback::from(move |_: ()| {
            if let Some(navigator) = &navigator {
                navigator.push(&ClienteRoute::Menu);
            }
        })
    };

    let on_back = {
        let draft = draft.clone();
        let go_to_menu = go_to_menu.clone();
        Callback::from(move |_: ()| {
            let mut next = (*draft).clone();
            match next.go_back() {
                BackOutcome::Stepped(step) => {
                    log::info!("↩️ Volviendo a {:?}", step);
                    draft.set(next);
                }
                BackOutcome::LeaveWizard => go_to_menu.emit(()),
            }
        })
    };

    let on_service = {
        let draft = draft.clone();
        Callback::from(move |service: Service| {
            let mut next = (*draft).clone();
            next.select_service(service);
            draft.set(next);
        })
    };

    let on_location = {
        let draft = draft.clone();
        Callback::from(move |location: Location| {
            let mut next = (*draft).clone();
            next.select_location(location);
            draft.set(next);
        })
    };

    let on_date = {
        let draft = draft.clone();
        Callback::from(move |date: NaiveDate| {
            let mut next = (*draft).clone();
            next.select_date(date);
            draft.set(next);
        })
    };

    let on_time = {
        let draft = draft.clone();
        Callback::from(move |time: String| {
            let mut next = (*draft).clone();
            next.select_time(time);
            draft.set(next);
        })
    };

    let on_confirmed = {
        let draft = draft.clone();
        let done = done.clone();
        Callback::from(move |_: ()| {
            draft.set(ReservationDraft::default());
            done.set(true);
            go_to_menu.emit(());
        })
    };

    let step = if *done { WizardStep::Done } else { derive_step(&draft) };
    let position = STEPS.iter().position(|s| *s == step).map_or(STEPS.len(), |i| i + 1);

    // Los `unwrap_or_default` nunca se usan: `derive_step` garantiza los campos previos
    let service_id = draft.service.as_ref().map(|s| s.id).unwrap_or_default();
    let view = match step {
        WizardStep::SelectingService => html! {
            <ServicesList on_select={on_service} on_back={Some(on_back)} />
        },
        WizardStep::SelectingLocation => html! {
            <LocationsList service_id={service_id} on_select={on_location} on_back={Some(on_back)} />
        },
        WizardStep::SelectingDate => html! {
            <Calendar service_id={service_id} on_select={on_date} on_back={Some(on_back)} />
        },
        WizardStep::SelectingTime => match draft.date {
            Some(date) => html! {
                <SlotsList service_id={service_id} date={date} on_select={on_time} on_back={Some(on_back)} />
            },
            None => html! {},
        },
        WizardStep::Confirming => html! {
            <ConfirmReservation draft={(*draft).clone()} on_back={on_back} on_confirmed={on_confirmed} />
        },
        WizardStep::Done => html! {
            <div class="success-alert">{"✅ Turno confirmado. Volviendo al menú..."}</div>
        },
    };

    html! {
        <div class="booking-wizard">
            <div class="wizard-progress">
                {format!("Paso {} de {}: {}", position, STEPS.len(), step.title())}
            </div>
            {view}
        </div>
    }
}
