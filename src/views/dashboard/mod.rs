mod admin_dashboard;
mod client_menu;
mod header;

pub use admin_dashboard::*;
pub use client_menu::*;
