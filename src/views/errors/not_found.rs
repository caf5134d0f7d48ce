use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_document_title;
use crate::routes::Route;

#[function_component(NotFoundView)]
pub fn not_found_view() -> Html {
    use_document_title("Página no encontrada");

    html! {
        <div class="error-page">
            <h1 class="error-code">{"404"}</h1>
            <h2>{"Página no encontrada"}</h2>
            <p>{"La página que buscas no existe."}</p>
            <Link<Route> to={Route::Root} classes="btn-primary">
                {"Volver al Inicio"}
            </Link<Route>>
        </div>
    }
}
