// ============================================================================
// CALENDARIO DE TURNOS - Fechas habilitadas por servicio y mes
// ============================================================================

use chrono::{Datelike, Local, NaiveDate};
use std::collections::HashSet;
use yew::prelude::*;

use crate::booking::calendar::{can_go_to_prev_month, is_selectable, MonthKey};
use crate::hooks::{use_available_dates, use_document_title, use_session};

const WEEKDAYS: [&str; 7] = ["Lu", "Ma", "Mi", "Ju", "Vi", "Sá", "Do"];

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub service_id: i64,
    pub on_select: Callback<NaiveDate>,
    #[prop_or_default]
    pub on_back: Option<Callback<()>>,
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    use_document_title("Selecciona una fecha");
    let session = use_session();

    let today = Local::now().date_naive();
    let month = use_state(|| MonthKey::of(today));
    let dates = use_available_dates(session.api(), props.service_id, *month);
    let available: HashSet<NaiveDate> = dates.items.iter().copied().collect();

    // Cambiar de mes dispara un nuevo fetch (la key del hook cambia)
    let on_prev = {
        let month = month.clone();
        Callback::from(move |_: MouseEvent| month.set(month.prev()))
    };
    let on_next = {
        let month = month.clone();
        Callback::from(move |_: MouseEvent| month.set(month.next()))
    };

    let back_button = props.on_back.as_ref().map(|on_back| html! {
        <button class="btn-back" onclick={on_back.reform(|_| ())}>
            {"← Volver a Ubicaciones"}
        </button>
    });

    let cells = month.grid().into_iter().map(|cell| match cell {
        None => html! { <span class="calendar-cell empty"></span> },
        Some(date) => {
            let enabled = is_selectable(date, today, &available);
            let on_click = {
                let on_select = props.on_select.clone();
                Callback::from(move |_: MouseEvent| on_select.emit(date))
            };
            let class = classes!(
                "calendar-cell",
                enabled.then_some("available"),
                (date == today).then_some("today"),
            );
            html! {
                <button class={class} disabled={!enabled} onclick={on_click}>
                    {date.day()}
                </button>
            }
        }
    });

    html! {
        <div class="calendar">
            <h2>{"Selecciona una fecha"}</h2>
            {for back_button}
            <div class="calendar-header">
                <button
                    class="calendar-nav"
                    disabled={!can_go_to_prev_month(*month, today)}
                    onclick={on_prev}
                >
                    {"‹"}
                </button>
                <span class="calendar-month">{month.label()}</span>
                <button class="calendar-nav" onclick={on_next}>{"›"}</button>
            </div>
            if dates.loading {
                <p class="calendar-loading">{"Cargando fechas disponibles..."}</p>
            }
            <div class="calendar-grid">
                { for WEEKDAYS.iter().map(|d| html! { <span class="calendar-weekday">{*d}</span> }) }
                { for cells }
            </div>
        </div>
    }
}
