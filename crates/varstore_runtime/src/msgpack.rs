//! `MessagePack` interchange for tables and registries.
//!
//! This is an export format for other tools. Files meant to be read back by
//! varstore use the framed binary format from `varstore_codec`.

use serde::Serialize;
use serde::de::DeserializeOwned;
use varstore_foundation::{Error, ErrorKind, Result, Table};
use varstore_schema::Database;

/// Serializes any serde-enabled unit using named fields.
///
/// # Errors
///
/// Returns `SerializationError` if serialization fails.
pub fn to_msgpack<T: Serialize + ?Sized>(unit: &T) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(unit)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Deserializes any serde-enabled unit.
///
/// # Errors
///
/// Returns `SerializationError` if the bytes are not a valid encoding.
pub fn from_msgpack<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    rmp_serde::from_slice(bytes)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Serializes a table to `MessagePack`.
///
/// # Errors
///
/// Returns `SerializationError` if serialization fails.
pub fn table_to_msgpack(table: &Table) -> Result<Vec<u8>> {
    to_msgpack(table)
}

/// Deserializes a table from `MessagePack`.
///
/// # Errors
///
/// Returns `SerializationError` if the bytes are not a valid encoding.
pub fn table_from_msgpack(bytes: &[u8]) -> Result<Table> {
    from_msgpack(bytes)
}

/// Serializes a registry to `MessagePack`.
///
/// # Errors
///
/// Returns `SerializationError` if serialization fails.
pub fn database_to_msgpack(db: &Database) -> Result<Vec<u8>> {
    to_msgpack(db)
}

/// Deserializes a registry from `MessagePack`.
///
/// # Errors
///
/// Returns `SerializationError` if the bytes are not a valid encoding.
pub fn database_from_msgpack(bytes: &[u8]) -> Result<Database> {
    from_msgpack(bytes)
}
