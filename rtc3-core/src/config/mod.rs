//! Configuration types
//!
//! Device-handle configuration chosen once at construction time.

pub mod device;

pub use device::*;
