use chrono::NaiveDate;
use yew::prelude::*;

use crate::booking::format_date;
use crate::components::list_shell::ListShell;
use crate::hooks::{use_available_slots, use_document_title, use_session};

#[derive(Properties, PartialEq)]
pub struct SlotsListProps {
    pub service_id: i64,
    pub date: NaiveDate,
    pub on_select: Callback<String>,
    #[prop_or_default]
    pub on_back: Option<Callback<()>>,
}

#[function_component(SlotsList)]
pub fn slots_list(props: &SlotsListProps) -> Html {
    use_document_title("Horarios disponibles");
    let session = use_session();
    let slots = use_available_slots(session.api(), props.service_id, props.date);

    let title = format!("Horarios disponibles para el {}", format_date(props.date));

    html! {
        <ListShell
            title={title}
            loading={slots.loading}
            loading_text="Cargando horarios..."
            is_empty={slots.items.is_empty()}
            empty_text={Some(AttrValue::from("No quedan horarios para esta fecha"))}
            back_label={Some(AttrValue::from("← Volver al Calendario"))}
            on_back={props.on_back.clone()}
        >
            { for slots.items.iter().map(|slot| {
                let on_click = {
                    let on_select = props.on_select.clone();
                    let slot = slot.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(slot.clone()))
                };
                html! {
                    <li key={slot.clone()}>
                        <button class="btn-item" onclick={on_click}>{slot.clone()}</button>
                    </li>
                }
            }) }
        </ListShell>
    }
}
