//! Value objects - immutable, self-validating domain values

mod address;
mod credit_card;
mod identity;
mod money;
mod name;
mod room_type;

pub use address::Address;
pub use credit_card::CreditCard;
pub use identity::Identity;
pub use money::Money;
pub use name::Name;
pub use room_type::RoomType;
