pub mod session_context;
pub mod use_booking_data;
pub mod use_document_title;
pub mod use_remote_list;

pub use session_context::{use_session, SessionHandle, SessionProvider};
pub use use_booking_data::{use_available_dates, use_available_slots, use_locations, use_services};
pub use use_document_title::use_document_title;
pub use use_remote_list::{use_remote_list, RemoteList};
