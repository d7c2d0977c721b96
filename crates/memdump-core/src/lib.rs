//! memdump-core: Core library for process memory snapshot archiving
//!
//! This library drives the dump workflow: capture a memory snapshot of a
//! target process with an external dump tool, compress it with an external
//! archiver, and deposit the result as a named archive - while a decoupled
//! caller (CLI or UI) observes staged progress. It is used by the `memdump`
//! CLI.
//!
//! # Main Entry Points
//!
//! - [`workflow`] - Start and observe dump invocations
//! - [`process`] - Session process listing and target selection
//! - [`config`] - Configuration management
//! - [`runner`] - External tool invocation
//!
//! # Example
//!
//! ```rust,no_run
//! use memdump_core::config::MemdumpConfig;
//! use memdump_core::process::{ProcessInspector, SystemInspector};
//! use memdump_core::workflow::{self, DumpRequest};
//!
//! fn example(pid: u32) -> Result<(), Box<dyn std::error::Error>> {
//!     let config = MemdumpConfig::load_hierarchy()?;
//!     let process = SystemInspector::new().resolve(pid)?;
//!     let handle = workflow::start_dump(
//!         DumpRequest {
//!             process,
//!             destination_dir: config.output.directory(),
//!         },
//!         &config,
//!     );
//!     for event in handle.events().iter() {
//!         println!("{}", event.stage);
//!     }
//!     let success = handle.wait()?;
//!     println!("archived at {}", success.final_path.display());
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod capture;
pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod naming;
pub mod process;
pub mod runner;
pub mod workflow;

// Re-export commonly used types at crate root for convenience
pub use config::MemdumpConfig;
pub use errors::{MemdumpError, MemdumpResult};
pub use process::{ProcessArch, ProcessInfo, ProcessInspector, ProcessRef, SystemInspector};
pub use runner::{SystemRunner, ToolRunner};
pub use workflow::{
    DumpError, DumpHandle, DumpRequest, DumpStage, DumpSuccess, ProgressEvent, ProgressSink,
};

// Re-export handler module as the primary API
pub use workflow::handler as dump_ops;

// Re-export logging initialization
pub use logging::init_logging;
