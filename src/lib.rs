//! A typed tour of structural language features: primitive values, unions,
//! records, capability contracts, generics, enumerations and shape utilities.

pub mod cli;
pub mod config;
pub mod enums;
pub mod error;
pub mod functions;
pub mod generics;
pub mod models;
pub mod navigation;
pub mod shapes;
pub mod tour;
pub mod values;

// Re-export the most common types for easier use
// Core types
pub use cli::TourArgs;
pub use config::TourConfig;
pub use error::{Result, TourError};

// Records and contracts
pub use models::{Employee, Fruit, FruitInterface, Identified, Person, Register, User};

// Shape utilities
pub use shapes::{FieldValue, KeyOf, get_property};

// Functions
pub use functions::{add, add2, apply, log, multiply, subtract};
pub use generics::get_id;
pub use navigation::with_default;
