pub mod app;
pub mod booking_wizard;
pub mod calendar;
pub mod confirm_reservation;
pub mod list_shell;
pub mod locations_list;
pub mod private_route;
pub mod services_list;
pub mod slots_list;

pub use app::App;
pub use booking_wizard::BookingWizard;
pub use calendar::Calendar;
pub use confirm_reservation::ConfirmReservation;
pub use list_shell::ListShell;
pub use locations_list::LocationsList;
pub use private_route::PrivateRoute;
pub use services_list::ServicesList;
pub use slots_list::SlotsList;
