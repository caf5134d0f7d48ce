// ============================================================================
// SISTEMA DE TURNOS - FRONTEND (Yew + yew-router)
// ============================================================================
// - Models: estructuras compartidas con el backend
// - Services: SOLO comunicación API
// - Booking: máquina de estados del wizard y calendario (sin DOM)
// - Stores / Hooks: sesión y datos remotos
// - Components / Views: UI
// ============================================================================

pub mod booking;
pub mod components;
pub mod config;
pub mod error;
pub mod guard;
pub mod hooks;
pub mod models;
pub mod routes;
pub mod services;
pub mod stores;
pub mod utils;
pub mod validation;
pub mod views;

pub use components::App;
