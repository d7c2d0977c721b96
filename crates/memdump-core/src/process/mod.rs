pub mod errors;
pub mod inspector;
pub mod operations;
pub mod types;

pub use errors::ProcessError;
pub use inspector::{ProcessInspector, SystemInspector};
pub use types::{ProcessArch, ProcessInfo, ProcessRef};
