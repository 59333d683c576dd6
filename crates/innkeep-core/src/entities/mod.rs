//! Domain entities - core business objects

mod guest;
mod hotel;
mod manager;
mod reservation;
mod room;

pub use guest::Guest;
pub use hotel::Hotel;
pub use manager::ReservationManager;
pub use reservation::{check_in_date_reached, Reservation, ReservationStatus};
pub use room::Room;
