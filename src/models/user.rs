//! User shaped records
//!
//! [`User`] is the plain object shape; [`UserInterface`] adds a read-only
//! identifier and an optional age that may be filled in after construction.

use serde::{Deserialize, Serialize};
use type_tour_macros::KeyOf;

/// A user with a name and an age
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, KeyOf)]
pub struct User {
    pub name: String,
    pub age: u32,
}

impl User {
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// The single user of the tour
pub fn user() -> User {
    User::new("Jack", 32)
}

/// An array of uniformly shaped users
pub fn users() -> Vec<User> {
    vec![User::new("Jack", 32), User::new("John", 47)]
}

/// A user whose `id` cannot be reassigned after construction.
///
/// ```compile_fail
/// use type_tour::models::UserInterface;
///
/// let mut user = UserInterface::new(1, "John");
/// user.id = 2;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserInterface {
    id: u32,
    pub name: String,
    pub age: Option<u32>,
}

impl UserInterface {
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            age: None,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}
