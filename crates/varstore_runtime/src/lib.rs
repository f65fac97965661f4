//! Runtime support for varstore.
//!
//! This crate provides:
//! - [`init_logging`] - `tracing` subscriber setup for binaries
//! - [`msgpack`] - `MessagePack` export of tables and registries
//! - [`Document`] - Decoding and listing files of any unit type
//!
//! The `varstore` binary is built on these.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod inspect;
pub mod logging;
pub mod msgpack;

pub use inspect::Document;
pub use logging::init_logging;
pub use msgpack::{
    database_from_msgpack, database_to_msgpack, from_msgpack, table_from_msgpack,
    table_to_msgpack, to_msgpack,
};
