//! Domain records - the entities the backend owns.

mod citizen;
mod user;

pub use citizen::{Citizen, Gender};
pub use user::{Role, User};
