// ============================================================================
// RUTAS - Superficie de navegación de la SPA
// ============================================================================

use yew_router::prelude::*;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/unauthorized")]
    Unauthorized,
    #[at("/server-error")]
    ServerError,
    #[not_found]
    #[at("/not-found")]
    NotFound,
    #[at("/dashboard/admin")]
    AdminRoot,
    #[at("/dashboard/admin/*")]
    Admin,
    #[at("/dashboard/cliente")]
    ClienteRoot,
    #[at("/dashboard/cliente/*")]
    Cliente,
}

/// Subárbol solo para ADMIN
#[derive(Debug, Clone, Routable, PartialEq)]
pub enum AdminRoute {
    #[at("/dashboard/admin")]
    Home,
    #[not_found]
    #[at("/dashboard/admin/404")]
    NotFound,
}

/// Subárbol solo para CLIENTE
#[derive(Debug, Clone, Routable, PartialEq)]
pub enum ClienteRoute {
    #[at("/dashboard/cliente")]
    Home,
    #[at("/dashboard/cliente/menu")]
    Menu,
    #[at("/dashboard/cliente/reservar")]
    Reservar,
    #[not_found]
    #[at("/dashboard/cliente/404")]
    NotFound,
}
