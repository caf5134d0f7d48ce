use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_document_title;
use crate::models::NavMessage;
use crate::routes::Route;
use crate::utils::SERVER_ERROR_FALLBACK;

#[function_component(ServerErrorView)]
pub fn server_error_view() -> Html {
    use_document_title("Error del servidor");
    let navigator = use_navigator();
    let location = use_location();

    let message = location
        .and_then(|l| l.state::<NavMessage>())
        .map(|m| m.message.clone())
        .unwrap_or_else(|| SERVER_ERROR_FALLBACK.to_string());

    let on_back = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.back();
            }
        })
    };
    let on_home = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Root);
        }
    });

    html! {
        <div class="error-page">
            <h1 class="error-code">{"500"}</h1>
            <h2>{"Error del servidor"}</h2>
            <p class="error-detail">{message}</p>
            <div class="error-actions">
                <button class="btn-secondary" onclick={on_back}>{"Volver Atrás"}</button>
                <button class="btn-primary" onclick={on_home}>{"Ir al Inicio"}</button>
            </div>
        </div>
    }
}
