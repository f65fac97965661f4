//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, Table, Matrix, Error, and the host bridge.

mod bridge;
mod errors;
mod tables;
mod values;
