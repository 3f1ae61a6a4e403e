//! Shape transformation utilities
//!
//! Derived record shapes are generated at compile time by the `Shape` derive:
//! from [`User2`] come [`Username`] (pick), [`UserWithoutId`] (omit),
//! [`PartialUser`], [`RequiredUser`] and [`ReadonlyUser`]. The `KeyOf` derive
//! produces a key union such as [`User2Key`] and keyed access through the
//! [`KeyOf`] trait.
//!
//! A read-only shape rejects writes at compile time:
//!
//! ```compile_fail
//! use type_tour::shapes::{ReadonlyUser, User2};
//!
//! let mut user = ReadonlyUser::from(User2::new(1, "John", "Doe", Some(30)));
//! user.name = "Jane".to_string();
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use type_tour_macros::Shape;

/// A field read through its key
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    /// The field is optional and not set
    Absent,
}

impl FieldValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
            Self::Boolean(flag) => write!(f, "{flag}"),
            Self::Absent => f.write_str("undefined"),
        }
    }
}

/// A record whose fields can be read through a key union
pub trait KeyOf {
    /// The key union, one member per field
    type Key: Copy + fmt::Display + 'static;

    /// Every key, in field declaration order
    fn keys() -> &'static [Self::Key];

    /// Read the field named by `key`
    fn get(&self, key: Self::Key) -> FieldValue;
}

/// Read one field of `obj` through its key
pub fn get_property<T: KeyOf>(obj: &T, key: T::Key) -> FieldValue {
    obj.get(key)
}

/// Every key of `obj` with its value
pub fn entries<T: KeyOf>(obj: &T) -> Vec<(T::Key, FieldValue)> {
    T::keys().iter().map(|&key| (key, obj.get(key))).collect()
}

/// A string keyed record with values of one type
pub type Record<V> = BTreeMap<String, V>;

/// Product prices keyed by product name
pub fn products() -> Record<f64> {
    Record::from([
        ("MacBook Air".to_string(), 12.0),
        ("AirPods Pro".to_string(), 18.0),
    ])
}

/// The base shape every derived user shape is built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Shape, type_tour_macros::KeyOf)]
#[shape(
    pick(name = "Username", fields(name, last_name)),
    omit(name = "UserWithoutId", fields(id)),
    partial = "PartialUser",
    required = "RequiredUser",
    readonly = "ReadonlyUser"
)]
#[serde(rename_all = "camelCase")]
pub struct User2 {
    pub id: u32,
    pub name: String,
    #[key_of(rename = "lastName")]
    pub last_name: String,
    pub age: Option<u32>,
}

impl User2 {
    #[must_use]
    pub fn new(
        id: u32,
        name: impl Into<String>,
        last_name: impl Into<String>,
        age: Option<u32>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            last_name: last_name.into(),
            age,
        }
    }
}

/// A user that is read-only as a whole
#[derive(Debug, Clone, PartialEq, Eq, Shape)]
#[shape(readonly = "ReadonlyUser4")]
pub struct User4 {
    pub first_name: String,
    pub last_name: String,
}
