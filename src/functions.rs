//! Function declarations and function-signature extraction
//!
//! Plain functions, a call-signature contract ([`MathFunction`]) and the
//! [`Signature`] trait, which exposes the parameter tuple and return type of a
//! function pointer the way `Parameters<F>` and `ReturnType<F>` do.

use std::io::Write;

use crate::error::Result;
use crate::models::User;
use crate::values::TextOrNumber;

/// Call-signature contract shared by the binary math functions
pub type MathFunction = fn(f64, f64) -> f64;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Multiply two numbers; bound to [`MathFunction`] as [`MULTIPLY`]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// `multiply` seen through its call-signature contract
pub const MULTIPLY: MathFunction = multiply;

/// Second adder, only ever called through a stored argument tuple
pub fn add2(a: f64, b: f64) -> f64 {
    a + b
}

/// Write a message on its own line of standard output
pub fn log(message: impl Into<TextOrNumber>) {
    println!("{}", message.into());
}

/// Write a message on its own line of `out`
pub fn write_log<W: Write>(out: &mut W, message: impl Into<TextOrNumber>) -> Result<()> {
    writeln!(out, "{}", message.into())?;
    Ok(())
}

/// A function whose parameter tuple and return type can be named
///
/// Implemented for function pointers of up to three arguments. Function items
/// coerce to pointers with a cast: `add2 as fn(f64, f64) -> f64`.
pub trait Signature {
    /// The parameters as a tuple
    type Params;
    /// The return type
    type Output;

    /// Call the function with its arguments spread out of a tuple
    fn call_with(&self, params: Self::Params) -> Self::Output;
}

impl<R> Signature for fn() -> R {
    type Params = ();
    type Output = R;

    fn call_with(&self, (): ()) -> R {
        self()
    }
}

impl<A, R> Signature for fn(A) -> R {
    type Params = (A,);
    type Output = R;

    fn call_with(&self, (a,): (A,)) -> R {
        self(a)
    }
}

impl<A, B, R> Signature for fn(A, B) -> R {
    type Params = (A, B);
    type Output = R;

    fn call_with(&self, (a, b): (A, B)) -> R {
        self(a, b)
    }
}

impl<A, B, C, R> Signature for fn(A, B, C) -> R {
    type Params = (A, B, C);
    type Output = R;

    fn call_with(&self, (a, b, c): (A, B, C)) -> R {
        self(a, b, c)
    }
}

/// The parameter tuple of a function type
pub type Parameters<F> = <F as Signature>::Params;

/// The return type of a function type
pub type ReturnType<F> = <F as Signature>::Output;

/// Call `f` with a stored argument tuple
pub fn apply<F: Signature>(f: F, params: F::Params) -> F::Output {
    f.call_with(params)
}

/// Parameters of [`add2`]
pub type AddParams = Parameters<fn(f64, f64) -> f64>;

/// Stored arguments for [`add2`]
pub const ADD_PARAMS: AddParams = (5.0, 10.0);

pub fn get_user() -> User {
    User {
        name: "Jane".to_string(),
        age: 28,
    }
}

/// Whatever [`get_user`] returns
pub type UserReturnType = ReturnType<fn() -> User>;

pub fn user_return_type() -> UserReturnType {
    User {
        name: "Bob".to_string(),
        age: 25,
    }
}
