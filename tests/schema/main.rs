//! Integration tests for Layer 2: Schema
//!
//! Tests for the metadata registry, typed access, and table validation.

mod access;
mod database;
mod validation;
