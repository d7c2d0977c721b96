use std::path::PathBuf;
use std::sync::mpsc::Sender;

use crate::process::ProcessRef;

/// Stage of an in-flight dump, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpStage {
    Capturing,
    Compressing,
    Relocating,
    Done,
}

impl DumpStage {
    pub fn label(&self) -> &'static str {
        match self {
            DumpStage::Capturing => "capturing",
            DumpStage::Compressing => "compressing",
            DumpStage::Relocating => "relocating",
            DumpStage::Done => "done",
        }
    }
}

impl std::fmt::Display for DumpStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One progress notification.
///
/// Each external tool call is atomic from the workflow's point of view, so
/// `percent` is always `None`; only the stage label carries information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressEvent {
    pub stage: DumpStage,
    pub percent: Option<u8>,
}

impl ProgressEvent {
    pub fn stage(stage: DumpStage) -> Self {
        Self {
            stage,
            percent: None,
        }
    }
}

/// Observer for progress events.
///
/// Delivery is fire-and-forget: the workflow never blocks on, or fails
/// because of, the observer. A caller with thread-affinity requirements
/// (e.g. a UI loop) marshals events to its own context; the workflow never
/// touches caller state directly.
pub trait ProgressSink: Send {
    fn emit(&self, event: ProgressEvent);
}

impl ProgressSink for Sender<ProgressEvent> {
    fn emit(&self, event: ProgressEvent) {
        // A dropped receiver just stops observing
        let _ = self.send(event);
    }
}

/// A dump invocation: the target snapshot plus where the archive lands.
#[derive(Debug, Clone)]
pub struct DumpRequest {
    pub process: ProcessRef,
    pub destination_dir: PathBuf,
}

/// Terminal success: the archive exists at `final_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpSuccess {
    pub final_path: PathBuf,
}
