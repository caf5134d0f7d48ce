pub mod auth;
pub mod dashboard;
pub mod errors;

pub use auth::*;
pub use dashboard::*;
pub use errors::*;
