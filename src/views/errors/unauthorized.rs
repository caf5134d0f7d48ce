use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_document_title, use_session};
use crate::models::Role;
use crate::routes::{ClienteRoute, Route};

#[function_component(UnauthorizedView)]
pub fn unauthorized_view() -> Html {
    use_document_title("Acceso denegado");
    let session = use_session();
    let navigator = use_navigator();

    let role = session.session().map(|s| s.role.clone());
    let role_label = role
        .as_ref()
        .map(|r| r.to_string())
        .unwrap_or_else(|| "Sin rol".to_string());

    let on_go_dashboard = Callback::from(move |_: MouseEvent| {
        let Some(navigator) = &navigator else { return };
        match &role {
            Some(Role::Admin) => navigator.push(&Route::AdminRoot),
            Some(Role::Cliente) => navigator.push(&ClienteRoute::Menu),
            _ => navigator.push(&Route::Login),
        }
    });

    html! {
        <div class="error-page">
            <h1 class="error-code">{"403"}</h1>
            <h2>{"Acceso denegado"}</h2>
            <p>{"No tienes permisos para ver esta página."}</p>
            <p class="error-detail">{format!("Tu rol actual: {}", role_label)}</p>
            <button class="btn-primary" onclick={on_go_dashboard}>
                {"Ir a mi panel"}
            </button>
        </div>
    }
}
