// ============================================================================
// APP - Provider de sesión + router
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{BookingWizard, PrivateRoute};
use crate::hooks::SessionProvider;
use crate::models::Role;
use crate::routes::{AdminRoute, ClienteRoute, Route};
use crate::views::{
    AdminDashboard, ClientMenu, LoginView, NotFoundView, RegisterView, ServerErrorView,
    UnauthorizedView,
};

fn switch(route: Route) -> Html {
    match route {
        Route::Root => html! { <Redirect<Route> to={Route::Login} /> },
        Route::Login => html! { <LoginView /> },
        Route::Register => html! { <RegisterView /> },
        Route::Unauthorized => html! { <UnauthorizedView /> },
        Route::ServerError => html! { <ServerErrorView /> },
        Route::NotFound => html! { <NotFoundView /> },
        Route::AdminRoot | Route::Admin => html! {
            <PrivateRoute permitted={vec![Role::Admin]}>
                <Switch<AdminRoute> render={switch_admin} />
            </PrivateRoute>
        },
        Route::ClienteRoot | Route::Cliente => html! {
            <PrivateRoute permitted={vec![Role::Cliente]}>
                <Switch<ClienteRoute> render={switch_cliente} />
            </PrivateRoute>
        },
    }
}

fn switch_admin(route: AdminRoute) -> Html {
    match route {
        AdminRoute::Home => html! { <AdminDashboard /> },
        AdminRoute::NotFound => html! { <NotFoundView /> },
    }
}

fn switch_cliente(route: ClienteRoute) -> Html {
    match route {
        ClienteRoute::Home => html! { <Redirect<ClienteRoute> to={ClienteRoute::Menu} /> },
        ClienteRoute::Menu => html! { <ClientMenu /> },
        ClienteRoute::Reservar => html! { <BookingWizard /> },
        ClienteRoute::NotFound => html! { <NotFoundView /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <BrowserRouter>
                <main class="app">
                    <Switch<Route> render={switch} />
                </main>
            </BrowserRouter>
        </SessionProvider>
    }
}
