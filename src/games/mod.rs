//! Rules engine implementations.

pub mod standard;
