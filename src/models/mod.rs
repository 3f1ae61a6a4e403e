//! Record shapes and capability contracts
//!
//! This module contains the records of the tour: user shaped records, the
//! person/employee pair and fruits. Behaviour shared between records is
//! expressed through the contracts in [`traits`] rather than inheritance.

pub mod fruit;
pub mod person;
pub mod traits;
pub mod user;

// Re-export commonly used types
pub use fruit::Fruit;
pub use person::{Employee, Person};
pub use traits::{FruitInterface, Identified, Register};
pub use user::{User, UserInterface, UserKey};
