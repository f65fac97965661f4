//! Core value cell, tables, and error types for varstore.
//!
//! This crate provides:
//! - [`Value`] - The tagged cell holding one variable's data
//! - [`Kind`] - The variant tag of a value, with stable wire codes
//! - [`Matrix`] - Dense row-major single-precision grids
//! - [`Table`] - Name-keyed collections of values
//! - [`HostValue`] - The bridge to a host's dynamic value type
//! - [`Error`] - Rich error types with context
//!
//! A `Table`, `Value`, or anything built from them is meant to be owned
//! and mutated by one logical owner at a time. Nothing here locks.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bridge;
pub mod error;
pub mod kind;
pub mod matrix;
pub mod table;
pub mod value;

pub use bridge::{DynValue, HostKind, HostValue};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use kind::Kind;
pub use matrix::Matrix;
pub use table::Table;
pub use value::Value;
