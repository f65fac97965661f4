//! Framed binary wire format for varstore.
//!
//! This crate provides:
//! - [`Encode`] / [`Decode`] - Strict encoding with typed [`DecodeError`]s
//! - [`Persist`] - Byte and fail-soft boolean persistence for any unit
//! - [`WireReader`] / [`WireWriter`] - Little-endian primitives and frames
//! - [`DecodeLimits`] - Allocation caps for untrusted streams
//! - File helpers ([`load_file`], [`save_file`], [`read_file`], [`write_file`])
//!
//! Values and tables are encoded here; the schema layer adds the metadata
//! registry units on top of the same primitives.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod file;
pub mod frame;
pub mod persist;
pub mod value;
pub mod wire;

pub use config::DecodeLimits;
pub use error::DecodeError;
pub use file::{load_file, read_file, save_file, write_file};
pub use frame::{FORMAT_VERSION, Marker, Unit};
pub use persist::{Decode, Encode, Persist};
pub use wire::{WireReader, WireWriter};
