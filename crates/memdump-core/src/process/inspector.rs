//! Platform capability seam for process inspection.
//!
//! The workflow and CLI depend only on [`ProcessInspector`]; the
//! `sysinfo`-backed [`SystemInspector`] is the one real implementation, and
//! tests substitute in-memory doubles.

use sysinfo::{Pid as SysinfoPid, ProcessesToUpdate, System};
use tracing::{debug, warn};

use crate::process::errors::ProcessError;
use crate::process::operations;
use crate::process::types::{ProcessInfo, ProcessRef};

/// Read-only view of OS process state.
pub trait ProcessInspector: Send + Sync {
    /// Processes visible in the caller's own login session, for display.
    fn list_session_processes(&self) -> Result<Vec<ProcessInfo>, ProcessError>;

    /// Snapshot a single process as a dump target.
    ///
    /// Performs the privileged architecture query; its failure is fatal for
    /// the selection.
    fn resolve(&self, pid: u32) -> Result<ProcessRef, ProcessError>;
}

/// `sysinfo`-backed inspector.
#[derive(Debug, Default)]
pub struct SystemInspector;

impl SystemInspector {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessInspector for SystemInspector {
    fn list_session_processes(&self) -> Result<Vec<ProcessInfo>, ProcessError> {
        let mut system = System::new();
        system.refresh_processes(ProcessesToUpdate::All, true);

        let current_pid =
            sysinfo::get_current_pid().map_err(|e| ProcessError::EnumerationFailed {
                message: format!("cannot determine current process: {}", e),
            })?;

        let current_session = system.process(current_pid).and_then(|p| p.session_id());
        if current_session.is_none() {
            // Without a session id we cannot scope the listing; show
            // everything rather than nothing.
            warn!(
                event = "core.process.session_id_unavailable",
                "Current session id unavailable, listing all visible processes"
            );
        }

        let mut processes = Vec::new();
        for (pid, process) in system.processes() {
            if let Some(session) = current_session
                && process.session_id() != Some(session)
            {
                continue;
            }

            processes.push(ProcessInfo {
                pid: pid.as_u32(),
                name: process.name().to_string_lossy().to_string(),
                memory_bytes: process.memory(),
            });
        }

        debug!(
            event = "core.process.session_listing_completed",
            count = processes.len()
        );

        Ok(processes)
    }

    fn resolve(&self, pid: u32) -> Result<ProcessRef, ProcessError> {
        if pid == 0 {
            return Err(ProcessError::InvalidPid { pid });
        }

        let mut system = System::new();
        let pid_obj = SysinfoPid::from_u32(pid);
        system.refresh_processes(ProcessesToUpdate::Some(&[pid_obj]), true);

        let process = system
            .process(pid_obj)
            .ok_or(ProcessError::NotFound { pid })?;

        let name = process.name().to_string_lossy().to_string();
        let arch = operations::process_arch(pid)?;

        debug!(
            event = "core.process.target_resolved",
            pid = pid,
            name = %name,
            arch = %arch
        );

        Ok(ProcessRef { pid, name, arch })
    }
}
