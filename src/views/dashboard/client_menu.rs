use yew::prelude::*;
use yew_router::prelude::*;

use super::header::DashboardHeader;
use crate::hooks::use_document_title;
use crate::routes::ClienteRoute;

#[function_component(ClientMenu)]
pub fn client_menu() -> Html {
    use_document_title("Menú");

    html! {
        <div class="dashboard client-menu">
            <DashboardHeader title="Mi panel" />
            <nav class="menu-options">
                <Link<ClienteRoute> to={ClienteRoute::Reservar} classes="menu-option">
                    <span class="menu-icon">{"📅"}</span>
                    <span>{"Reservar turno"}</span>
                </Link<ClienteRoute>>
            </nav>
        </div>
    }
}
