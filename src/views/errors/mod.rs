mod not_found;
mod server_error;
mod unauthorized;

pub use not_found::*;
pub use server_error::*;
pub use unauthorized::*;
