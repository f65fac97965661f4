//! Integration tests for Layer 1: Codec
//!
//! Tests for the framed wire format, fail-soft reads, limits, and files.

mod frames;
mod limits;
