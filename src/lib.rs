//! Almanac: a local, single-user to-do list core.
//!
//! This crate owns a task list, persists it into one slot of a key-value
//! store after every change, and derives what a calendar-style task board
//! shows: the tasks visible for a selected day, overdue flags, the days that
//! carry outstanding deadlines, and overall completion progress.
//!
//! # Architecture
//!
//! Almanac follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task and calendar types with no infrastructure
//!   dependencies
//! - **Ports**: The key-value slot trait the store persists through
//! - **Adapters**: In-memory and directory-backed slot stores
//! - **Views**: Pure derivations recomputed from a task list snapshot
//!
//! # Modules
//!
//! - [`config`]: Storage key and calendar zone configuration
//! - [`task`]: Task store, persistence codec and derived views

pub mod config;
pub mod task;
