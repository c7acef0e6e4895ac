//! Integration test crate for Klimrod.
//!
//! This crate has no library code; it only contains integration tests
//! that exercise sheets end to end across the workspace crates.
//!
//! Run all integration tests:
//! ```sh
//! cargo test -p klimrod-integration-tests
//! ```
