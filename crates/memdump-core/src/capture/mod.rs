pub mod errors;
pub mod operations;

pub use errors::CaptureError;
pub use operations::{DUMP_OK_MARKER, capture_process, capture_tool_path};
