//! Cross-layer integration tests for varstore
//!
//! Tests that verify correct interaction between multiple crates.

mod documents;
mod host_roundtrip;
mod registry_driven;
