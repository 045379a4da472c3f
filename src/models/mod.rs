pub mod removal;
pub mod service;

pub use removal::*;
pub use service::*;
