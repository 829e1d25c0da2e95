//! Development-only helpers.
//!
//! Compiled for tests and under the `development` feature, never into
//! release builds.

pub mod mock_client;
