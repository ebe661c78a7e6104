//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Font descriptor tests
//! - Model construction tests
//! - Handler tests against bare model handles

#[cfg(test)]
mod model_tests;
