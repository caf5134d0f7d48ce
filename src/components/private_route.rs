use yew::prelude::*;
use yew_router::prelude::*;

use crate::guard::{authorize, GuardDecision};
use crate::hooks::use_session;
use crate::models::Role;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct PrivateRouteProps {
    pub permitted: Vec<Role>,
    #[prop_or_default]
    pub children: Children,
}

/// Renderiza el subárbol solo si el rol de la sesión está permitido
#[function_component(PrivateRoute)]
pub fn private_route(props: &PrivateRouteProps) -> Html {
    let session = use_session();

    match authorize(session.session(), &props.permitted) {
        GuardDecision::Allow => html! { <>{props.children.clone()}</> },
        GuardDecision::RedirectToLogin => {
            log::warn!("🔒 Ruta privada sin sesión, redirigiendo a login");
            html! { <Redirect<Route> to={Route::Login} /> }
        }
        GuardDecision::RedirectToUnauthorized => {
            log::warn!("🚫 Rol no permitido para esta ruta");
            html! { <Redirect<Route> to={Route::Unauthorized} /> }
        }
    }
}
