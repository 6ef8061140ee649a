//! # Civic Types
//!
//! Records exchanged with the population management backend.
//! Wire names are camelCase; everything here is a plain value type.

pub mod domain;
pub mod dto;
pub mod error;

pub use domain::{Citizen, Gender, Role, User};
pub use dto::{AuthResponse, LoginRequest, RegisterRequest};
pub use error::{ApiError, ParseEnumError};
