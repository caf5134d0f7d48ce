use yew::prelude::*;
use yew_router::prelude::*;

use crate::booking::{format_date, ReservationDraft};
use crate::error::SubmitFailure;
use crate::hooks::{use_document_title, use_session};
use crate::models::NavMessage;
use crate::routes::Route;
use crate::utils::{RESERVATION_ERROR_FALLBACK, SERVER_ERROR_FALLBACK};

#[derive(Properties, PartialEq)]
pub struct ConfirmReservationProps {
    pub draft: ReservationDraft,
    pub on_back: Callback<()>,
    /// Se emite solo si el backend aceptó la reserva
    pub on_confirmed: Callback<()>,
}

#[function_component(ConfirmReservation)]
pub fn confirm_reservation(props: &ConfirmReservationProps) -> Html {
    use_document_title("Confirmar turno");
    let session = use_session();
    let navigator = use_navigator();
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_confirm = {
        let api = session.api();
        let draft = props.draft.clone();
        let on_confirmed = props.on_confirmed.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(request) = draft.to_request() else {
                log::warn!("⚠️ Confirmación con borrador incompleto: {:?}", draft);
                return;
            };
            submitting.set(true);
            error.set(None);

            let api = api.clone();
            let on_confirmed = on_confirmed.clone();
            let navigator = navigator.clone();
            let submitting = submitting.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api.create_reservation(&request).await {
                    Ok(confirmation) => {
                        log::info!("✅ Turno confirmado (id {:?})", confirmation.id);
                        on_confirmed.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Error confirmando turno: {}", e);
                        submitting.set(false);
                        match SubmitFailure::classify(&e, SERVER_ERROR_FALLBACK, RESERVATION_ERROR_FALLBACK) {
                            SubmitFailure::ServerErrorPage(message) => {
                                if let Some(navigator) = navigator {
                                    navigator.push_with_state(&Route::ServerError, NavMessage::new(message));
                                }
                            }
                            SubmitFailure::Inline(message) => error.set(Some(message)),
                        }
                    }
                }
            });
        })
    };

    let draft = &props.draft;
    let row = |label: &str, value: Option<String>| html! {
        <div class="summary-row">
            <span class="summary-label">{label.to_string()}</span>
            <span class="summary-value">{value.unwrap_or_default()}</span>
        </div>
    };

    html! {
        <div class="confirm-reservation">
            <h2>{"Confirmar turno"}</h2>
            <div class="summary">
                {row("Servicio", draft.service.as_ref().map(|s| s.nombre.clone()))}
                {row("Ubicación", draft.location.as_ref().map(|l| l.direccion.clone()))}
                {row("Fecha", draft.date.map(format_date))}
                {row("Hora", draft.time.clone())}
            </div>

            if let Some(message) = (*error).clone() {
                <div class="error-alert">{message}</div>
            }

            <div class="confirm-actions">
                <button
                    class="btn-secondary"
                    disabled={*submitting}
                    onclick={props.on_back.reform(|_| ())}
                >
                    {"← Volver a Horarios"}
                </button>
                <button class="btn-primary" disabled={*submitting} onclick={on_confirm}>
                    { if *submitting { "Confirmando..." } else { "Confirmar turno" } }
                </button>
            </div>
        </div>
    }
}
