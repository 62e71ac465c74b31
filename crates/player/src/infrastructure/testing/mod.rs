//! Test support shared by unit tests and the integration test suite.

pub mod fixtures;
