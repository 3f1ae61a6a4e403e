//! Person and employee records
//!
//! Two independent implementations of the [`Register`] contract. An employee
//! carries the same identifier and name as a person plus a position, and its
//! registration message replaces the person one entirely.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::traits::{Identified, Register};

/// A registered person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: u32,
    pub name: String,
}

impl Person {
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Identified for Person {
    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Register for Person {
    fn register(&self) -> String {
        debug!("Registering person {}", self.id);
        format!("{} is now registered", self.name)
    }
}

/// A person employed in some position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub position: String,
}

impl Employee {
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            position: position.into(),
        }
    }

    /// The person part of this employee
    #[must_use]
    pub fn as_person(&self) -> Person {
        Person::new(self.id, self.name.clone())
    }
}

impl Identified for Employee {
    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Register for Employee {
    fn register(&self) -> String {
        debug!("Registering employee {} as {}", self.id, self.position);
        format!("{} is now registered as an employee", self.name)
    }
}
