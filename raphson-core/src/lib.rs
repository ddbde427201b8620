//! Core contracts for the Raphson root-finding crates.
//!
//! This crate defines the abstractions that solver crates build on:
//!
//! - [`ScalarFn`] — a scalar function of one real variable, the contract
//!   shared by a function and its caller-supplied derivative.
//! - [`Observer`] — receives solver events and can optionally steer the
//!   iteration, enabling logging or early stopping without changing a
//!   solver's API.

mod function;
mod observe;

pub use function::ScalarFn;
pub use observe::Observer;
