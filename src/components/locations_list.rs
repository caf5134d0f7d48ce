use yew::prelude::*;

use crate::components::list_shell::ListShell;
use crate::hooks::{use_document_title, use_locations, use_session};
use crate::models::Location;

#[derive(Properties, PartialEq)]
pub struct LocationsListProps {
    pub service_id: i64,
    pub on_select: Callback<Location>,
    #[prop_or_default]
    pub on_back: Option<Callback<()>>,
}

/// Ubicaciones del servicio elegido; se recargan si cambia `service_id`
#[function_component(LocationsList)]
pub fn locations_list(props: &LocationsListProps) -> Html {
    use_document_title("Ubicaciones disponibles");
    let session = use_session();
    let locations = use_locations(session.api(), props.service_id);

    html! {
        <ListShell
            title="Ubicaciones disponibles"
            loading={locations.loading}
            loading_text="Cargando ubicaciones..."
            is_empty={locations.items.is_empty()}
            empty_text={Some(AttrValue::from("No hay ubicaciones para este servicio"))}
            back_label={Some(AttrValue::from("← Volver a Servicios"))}
            on_back={props.on_back.clone()}
        >
            { for locations.items.iter().map(|location| {
                let on_click = {
                    let on_select = props.on_select.clone();
                    let location = location.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(location.clone()))
                };
                html! {
                    <li key={location.id.to_string()}>
                        <button class="btn-item" onclick={on_click}>{location.direccion.clone()}</button>
                    </li>
                }
            }) }
        </ListShell>
    }
}
