pub mod engine;
pub mod errors;
pub mod handler;
pub mod types;

pub use engine::run_dump;
pub use errors::DumpError;
pub use handler::{DumpHandle, start_dump, start_dump_with};
pub use types::{DumpRequest, DumpStage, DumpSuccess, ProgressEvent, ProgressSink};
