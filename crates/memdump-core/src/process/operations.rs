//! Architecture probing primitives.
//!
//! Determining whether a target is a 32-bit or 64-bit process is a
//! privileged query against OS process state. A probe failure is fatal for
//! the selection - guessing the architecture would silently pick the wrong
//! capture tool variant.

use tracing::debug;

use crate::process::errors::ProcessError;
use crate::process::types::ProcessArch;

/// Determine the architecture class of a running process.
///
/// On a 32-bit operating system every visible process is 32-bit; on a
/// 64-bit operating system the target's executable image is probed.
pub fn process_arch(pid: u32) -> Result<ProcessArch, ProcessError> {
    if pid == 0 {
        return Err(ProcessError::InvalidPid { pid });
    }

    if !os_is_64_bit() {
        return Ok(ProcessArch::X86);
    }

    let arch = probe_executable_arch(pid)?;
    debug!(
        event = "core.process.arch_probed",
        pid = pid,
        arch = %arch
    );
    Ok(arch)
}

fn os_is_64_bit() -> bool {
    cfg!(target_pointer_width = "64")
}

/// Probe the ELF class of `/proc/<pid>/exe`.
///
/// Requires permission to follow the target's exe link; denial surfaces as
/// `ArchQueryFailed`, never a guess.
#[cfg(target_os = "linux")]
fn probe_executable_arch(pid: u32) -> Result<ProcessArch, ProcessError> {
    use std::io::Read;

    let exe_path = format!("/proc/{}/exe", pid);
    let mut file =
        std::fs::File::open(&exe_path).map_err(|e| ProcessError::ArchQueryFailed {
            pid,
            message: format!("cannot open '{}': {}", exe_path, e),
        })?;

    // ELF identification: 4 magic bytes, then EI_CLASS (1 = 32-bit, 2 = 64-bit)
    let mut ident = [0u8; 5];
    file.read_exact(&mut ident)
        .map_err(|e| ProcessError::ArchQueryFailed {
            pid,
            message: format!("cannot read ELF header of '{}': {}", exe_path, e),
        })?;

    if &ident[0..4] != b"\x7fELF" {
        return Err(ProcessError::ArchQueryFailed {
            pid,
            message: format!("'{}' is not an ELF image", exe_path),
        });
    }

    match ident[4] {
        1 => Ok(ProcessArch::X86),
        2 => Ok(ProcessArch::X64),
        other => Err(ProcessError::ArchQueryFailed {
            pid,
            message: format!("unknown ELF class {}", other),
        }),
    }
}

#[cfg(not(target_os = "linux"))]
fn probe_executable_arch(pid: u32) -> Result<ProcessArch, ProcessError> {
    Err(ProcessError::ArchQueryFailed {
        pid,
        message: "architecture probe is not supported on this platform".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_arch_rejects_pid_zero() {
        let result = process_arch(0);
        assert!(matches!(result, Err(ProcessError::InvalidPid { pid: 0 })));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_process_arch_of_self() {
        // Probing our own executable must agree with how we were compiled.
        let arch = process_arch(std::process::id()).expect("probe of self failed");
        if cfg!(target_pointer_width = "64") {
            assert_eq!(arch, ProcessArch::X64);
        } else {
            assert_eq!(arch, ProcessArch::X86);
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_process_arch_of_missing_process() {
        let result = process_arch(u32::MAX - 1);
        assert!(matches!(
            result,
            Err(ProcessError::ArchQueryFailed { .. })
        ));
    }
}
