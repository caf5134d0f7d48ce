use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct DashboardHeaderProps {
    pub title: AttrValue,
}

/// Encabezado de los paneles: saludo + logout
#[function_component(DashboardHeader)]
pub fn dashboard_header(props: &DashboardHeaderProps) -> Html {
    let session = use_session();
    let navigator = use_navigator();

    let greeting = session
        .session()
        .map(|s| format!("Hola, {}", s.display_name()))
        .unwrap_or_default();

    let on_logout = {
        let logout = session.logout.clone();
        Callback::from(move |_: MouseEvent| {
            logout.emit(());
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    html! {
        <header class="dashboard-header">
            <h1>{props.title.clone()}</h1>
            <span class="dashboard-greeting">{greeting}</span>
            <button class="btn-logout" onclick={on_logout}>{"Cerrar sesión"}</button>
        </header>
    }
}
