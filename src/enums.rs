//! Enumerations
//!
//! Numeric enumerations are declared through `numeric_enum!`, which keeps a
//! name table next to the enum for reverse (value to name) lookups. String
//! coded enumerations only map forward, from member to code.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TourError};

/// Declare an `i32` backed enumeration with a reverse lookup table
///
/// Only the first member may carry an explicit value; the rest count up
/// from it, starting at zero when no value is given.
///
/// ```rust,ignore
/// numeric_enum! {
///     pub enum Level { Low = 1, Medium, High }
/// }
/// assert_eq!(Level::High.value(), 3);
/// assert_eq!(Level::name_of(2), Some("Medium"));
/// ```
macro_rules! numeric_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident { $first:ident = $base:literal $(, $rest:ident)* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        $vis enum $name {
            $first = $base,
            $($rest,)*
        }

        impl $name {
            /// Every member with its name, in declaration order
            pub const MEMBERS: &'static [(&'static str, Self)] = &[
                (stringify!($first), Self::$first),
                $((stringify!($rest), Self::$rest),)*
            ];

            /// The underlying value
            pub const fn value(self) -> i32 {
                self as i32
            }

            /// The member name
            pub const fn name(self) -> &'static str {
                match self {
                    Self::$first => stringify!($first),
                    $(Self::$rest => stringify!($rest),)*
                }
            }

            /// Reverse lookup from value to member name
            pub fn name_of(value: i32) -> Option<&'static str> {
                Self::MEMBERS
                    .iter()
                    .find(|(_, member)| member.value() == value)
                    .map(|(name, _)| *name)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TourError;

            fn try_from(value: i32) -> Result<Self> {
                Self::MEMBERS
                    .iter()
                    .find(|(_, member)| member.value() == value)
                    .map(|(_, member)| *member)
                    .ok_or_else(|| TourError::UnknownMember {
                        enumeration: stringify!($name),
                        value: value.to_string(),
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.value())
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident { $first:ident $(, $rest:ident)* $(,)? }
    ) => {
        numeric_enum! {
            $(#[$meta])*
            $vis enum $name { $first = 0 $(, $rest)* }
        }
    };
}

numeric_enum! {
    /// Colours numbered from zero
    pub enum Color { Red, Green, Blue }
}

numeric_enum! {
    /// Colours numbered from one
    pub enum Color2 { Red = 1, Green, Blue }
}

/// Colours backed by their hex code
///
/// There is no reverse lookup from code to member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Color3 {
    #[serde(rename = "#ff0000")]
    Red,
    #[serde(rename = "#00ff00")]
    Green,
    #[serde(rename = "#0000ff")]
    Blue,
}

impl Color3 {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Red => "#ff0000",
            Self::Green => "#00ff00",
            Self::Blue => "#0000ff",
        }
    }
}

impl fmt::Display for Color3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The `"light" | "dark"` literal union
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSwitch {
    #[default]
    Light,
    Dark,
}

impl ThemeSwitch {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeSwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeSwitch {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(TourError::UnknownMember {
                enumeration: "ThemeSwitch",
                value: other.to_string(),
            }),
        }
    }
}
