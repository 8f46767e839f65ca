//! Common test utilities for ferrel integration tests.

pub mod test_data;
