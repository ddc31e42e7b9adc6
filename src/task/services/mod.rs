//! Application services for the to-do board.

pub mod codec;
mod form;
mod session;
mod store;

pub use codec::CodecError;
pub use form::TaskForm;
pub use session::TodoSession;
pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
