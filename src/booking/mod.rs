pub mod calendar;
pub mod request_tracker;
pub mod wizard;

pub use calendar::{format_date, is_selectable, MonthKey};
pub use request_tracker::{RequestTicket, RequestTracker};
pub use wizard::{derive_step, BackOutcome, ReservationDraft, WizardStep};
