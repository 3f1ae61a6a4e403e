//! Primitive and composite value declarations
//!
//! Scalars, arrays, tuples, unions and the untyped `any` value. The untyped
//! value is a [`serde_json::Value`], which can hold anything the dynamic
//! language can.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{Result, TourError};

/// A value that is either text or a number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextOrNumber {
    Text(String),
    Number(f64),
}

impl From<&str> for TextOrNumber {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TextOrNumber {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for TextOrNumber {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for TextOrNumber {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl fmt::Display for TextOrNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

/// Every basic binding of the tour, with its literal value
#[derive(Debug, Clone, PartialEq)]
pub struct BasicValues {
    pub number: f64,
    pub string: String,
    pub boolean: bool,
    pub any: Value,
    pub array_of_numbers: Vec<f64>,
    pub array_of_strings: Vec<String>,
    pub array_of_any: Vec<Value>,
    pub array_of_objects: Vec<Value>,
    pub tuple: (String, f64),
    pub tuple_array: Vec<(String, f64)>,
    pub union: TextOrNumber,
}

impl Default for BasicValues {
    fn default() -> Self {
        Self {
            number: 32.0,
            string: "John".to_string(),
            boolean: true,
            any: json!("this could be any type"),
            array_of_numbers: vec![1.0, 2.0, 3.0],
            array_of_strings: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            array_of_any: vec![json!(1), json!("a"), json!(true)],
            array_of_objects: vec![json!({ "a": 1 }), json!({ "b": 2 })],
            tuple: ("a".to_string(), 1.0),
            tuple_array: vec![("a".to_string(), 1.0), ("b".to_string(), 2.0)],
            // Declared as text, then reassigned to a number
            union: TextOrNumber::from(1),
        }
    }
}

/// Name of the JSON type held by an untyped value
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Assert that an untyped value is a number
///
/// Unlike a cast, the assertion is checked: a numeric string such as `"123"`
/// is still a string and is rejected.
pub fn assert_number(value: &Value) -> Result<f64> {
    value.as_f64().ok_or_else(|| TourError::AssertionError {
        expected: "number",
        found: type_name(value).to_string(),
    })
}

/// Assert that an untyped value is a string
pub fn assert_string(value: &Value) -> Result<&str> {
    value.as_str().ok_or_else(|| TourError::AssertionError {
        expected: "string",
        found: type_name(value).to_string(),
    })
}
