//! Trait definitions for records
//!
//! This module defines the capability contracts records implement. A record
//! satisfies a contract by providing the listed operations; no record derives
//! from another.

/// A record with a numeric identifier and a display name.
///
/// `Identified` stands in for the fields a subclass would inherit: both
/// [`Person`](crate::models::Person) and [`Employee`](crate::models::Employee)
/// provide them on their own.
pub trait Identified {
    /// Get the identifier
    fn id(&self) -> u32;

    /// Get the display name
    fn name(&self) -> &str;
}

/// A record that can be registered.
///
/// Each implementation produces its own complete message; there is no base
/// message to extend.
pub trait Register: Identified {
    /// Confirmation message for the registration
    fn register(&self) -> String;
}

/// The fruit contract: a name, a favourite flag and a message derived from
/// both.
pub trait FruitInterface {
    fn name(&self) -> &str;

    fn is_favorite(&self) -> bool;

    /// One of two fixed messages, depending on [`is_favorite`](Self::is_favorite)
    fn favorite(&self) -> String;
}
