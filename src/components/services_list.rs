use yew::prelude::*;

use crate::components::list_shell::ListShell;
use crate::hooks::{use_document_title, use_services, use_session};
use crate::models::Service;

#[derive(Properties, PartialEq)]
pub struct ServicesListProps {
    pub on_select: Callback<Service>,
    #[prop_or_default]
    pub on_back: Option<Callback<()>>,
}

#[function_component(ServicesList)]
pub fn services_list(props: &ServicesListProps) -> Html {
    use_document_title("Servicios disponibles");
    let session = use_session();
    let services = use_services(session.api());

    html! {
        <ListShell
            title="Servicios disponibles"
            loading={services.loading}
            loading_text="Cargando servicios..."
            is_empty={services.items.is_empty()}
            empty_text={Some(AttrValue::from("No hay servicios disponibles"))}
            back_label={Some(AttrValue::from("← Volver al Menú"))}
            on_back={props.on_back.clone()}
        >
            { for services.items.iter().map(|service| {
                let on_click = {
                    let on_select = props.on_select.clone();
                    let service = service.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(service.clone()))
                };
                html! {
                    <li key={service.id.to_string()}>
                        <button class="btn-item" onclick={on_click}>{service.nombre.clone()}</button>
                    </li>
                }
            }) }
        </ListShell>
    }
}
