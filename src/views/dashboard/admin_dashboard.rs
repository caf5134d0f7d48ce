use yew::prelude::*;

use super::header::DashboardHeader;
use crate::hooks::{use_document_title, use_services, use_session};

/// Panel de administración: catálogo de servicios en solo lectura
#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    use_document_title("Panel de administración");
    let session = use_session();
    let services = use_services(session.api());

    let catalog = if services.loading {
        html! { <p class="list-loading">{"Cargando servicios..."}</p> }
    } else if services.items.is_empty() {
        html! { <p class="list-empty">{"No hay servicios cargados"}</p> }
    } else {
        html! {
            <table class="services-table">
                <thead>
                    <tr><th>{"ID"}</th><th>{"Servicio"}</th></tr>
                </thead>
                <tbody>
                    { for services.items.iter().map(|service| html! {
                        <tr key={service.id.to_string()}>
                            <td>{service.id}</td>
                            <td>{service.nombre.clone()}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        }
    };

    html! {
        <div class="dashboard admin-dashboard">
            <DashboardHeader title="Panel de administración" />
            <section class="dashboard-section">
                <h2>{"Servicios"}</h2>
                {catalog}
            </section>
        </div>
    }
}
