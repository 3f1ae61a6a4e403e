//! Safe navigation and defaulting
//!
//! Reading through an optional nested record short-circuits to `None` instead
//! of failing. Defaulting substitutes a fallback only for an absent value; a
//! present value is kept even when it is `0` or empty.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    pub name: String,
    pub number: u32,
}

/// A record with an optional nested street and an optional age
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: Option<Street>,
    pub age: Option<u32>,
}

impl Address {
    pub fn street_name(&self) -> Option<&str> {
        self.street.as_ref().map(|street| street.name.as_str())
    }

    pub fn street_number(&self) -> Option<u32> {
        self.street.as_ref().map(|street| street.number)
    }

    /// The age, or `default_age` when none is set
    pub fn age_or(&self, default_age: u32) -> u32 {
        with_default(self.age, default_age)
    }
}

/// Substitute `fallback` when `value` is absent
pub fn with_default<T>(value: Option<T>, fallback: T) -> T {
    value.unwrap_or(fallback)
}
