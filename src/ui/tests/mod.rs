//! UI module tests
//!
//! Controller tests only; nothing here needs a display server.

#[cfg(test)]
mod controller_tests;
