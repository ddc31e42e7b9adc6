//! Task list management.
//!
//! Owns the task list, mirrors it into a key-value slot after every
//! mutation, and derives the views a board renders from it. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Store, form and session services in [`services`]
//! - Pure derived views in [`views`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod views;

#[cfg(test)]
mod tests;
