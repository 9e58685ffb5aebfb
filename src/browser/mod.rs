pub mod error;
pub mod handle;
pub mod probe;
pub mod session;
