//! varstore - Dynamically-typed variable store
//!
//! This crate re-exports all layers of the varstore system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: varstore_runtime    - Logging, MessagePack export, inspection CLI
//! Layer 2: varstore_schema     - Variable metadata registry, constraints, typed access
//! Layer 1: varstore_codec      - Framed binary wire format, file helpers
//! Layer 0: varstore_foundation - Core types (Value, Table, Matrix, Error)
//! ```

pub use varstore_codec as codec;
pub use varstore_foundation as foundation;
pub use varstore_runtime as runtime;
pub use varstore_schema as schema;
