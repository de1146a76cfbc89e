//! Drivers behind the two binaries.

pub mod batch;
pub mod fetch;
