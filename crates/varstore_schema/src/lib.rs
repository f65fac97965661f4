//! Variable metadata and typed access for varstore.
//!
//! This crate provides:
//! - [`VarInfo`] / [`Database`] - The metadata registry and its wire units
//! - [`VarFlags`] - Role flags carried by each record
//! - [`Constraints`] / [`Requirement`] - Textual value and presence rules
//! - [`VarType`], [`get`], [`set`] - Typed reads and writes of table entries
//! - [`FieldSpec`] / [`Schema`] - Declarations that validate whole tables

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod access;
pub mod constraint;
pub mod database;
pub mod flags;
pub mod info;
pub mod requirement;
pub mod schema;

pub use access::{VarType, get, set};
pub use constraint::{Constraint, Constraints};
pub use database::{Database, NOT_FOUND_LABEL};
pub use flags::VarFlags;
pub use info::{INDEX_LABEL_SEPARATOR, VarInfo};
pub use requirement::Requirement;
pub use schema::{FieldSpec, Problem, Schema, Violation};
