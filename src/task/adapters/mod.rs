//! Adapter implementations for the key-value slot port.

pub mod file;
pub mod memory;
