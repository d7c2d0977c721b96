use serde::{Deserialize, Serialize};

/// Architecture class of a target process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessArch {
    X86,
    X64,
}

impl ProcessArch {
    /// Subdirectory of the capture tool directory holding this
    /// architecture's tool variant.
    pub fn tool_subdir(&self) -> &'static str {
        match self {
            ProcessArch::X86 => "x86",
            ProcessArch::X64 => "x64",
        }
    }
}

impl std::fmt::Display for ProcessArch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessArch::X86 => write!(f, "32-bit"),
            ProcessArch::X64 => write!(f, "64-bit"),
        }
    }
}

/// Snapshot of a selected target process.
///
/// Taken at selection time via [`super::inspector::ProcessInspector::resolve`];
/// the process may exit or change between selection and dump execution, in
/// which case the capture stage fails cleanly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRef {
    pub pid: u32,
    pub name: String,
    pub arch: ProcessArch,
}

/// One row of the session process listing, for display purposes.
///
/// Deliberately does not carry an architecture: the privileged probe runs
/// only against the single process the operator selects, not the whole list.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessInfo {
    pub pid: u32,
    pub name: String,
    pub memory_bytes: u64,
}

impl ProcessInfo {
    pub fn memory_mb(&self) -> u64 {
        self.memory_bytes / 1_024 / 1_024
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arch_tool_subdir() {
        assert_eq!(ProcessArch::X86.tool_subdir(), "x86");
        assert_eq!(ProcessArch::X64.tool_subdir(), "x64");
    }

    #[test]
    fn test_arch_display() {
        assert_eq!(ProcessArch::X64.to_string(), "64-bit");
        assert_eq!(ProcessArch::X86.to_string(), "32-bit");
    }

    #[test]
    fn test_memory_mb() {
        let info = ProcessInfo {
            pid: 1,
            name: "init".to_string(),
            memory_bytes: 5 * 1_024 * 1_024,
        };
        assert_eq!(info.memory_mb(), 5);
    }
}
