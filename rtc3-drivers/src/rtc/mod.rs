//! Real-time clock driver implementations

pub mod bq32000;
#[cfg(test)]
pub(crate) mod mock;

pub use bq32000::Rtc3;
