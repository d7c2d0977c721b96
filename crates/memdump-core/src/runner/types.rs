use std::path::PathBuf;

/// A request to run an external program.
///
/// The working directory is implicit (the caller's current directory), which
/// is also how relative tool paths in the configuration resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl ToolInvocation {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Rendered command line, for the invocation log.
    pub fn command_line(&self) -> String {
        if self.args.is_empty() {
            self.program.display().to_string()
        } else {
            format!("{} {}", self.program.display(), self.args.join(" "))
        }
    }
}

/// Captured output of an external program that ran and exited.
///
/// Exit codes are deliberately not interpreted: the external tools speak a
/// textual protocol, and callers match known success phrases against
/// `stdout`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolResult {
    pub stdout: String,
    pub stderr: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_with_args() {
        let invocation = ToolInvocation::new(
            "/opt/tools/7za",
            vec!["a".to_string(), "out.zip".to_string()],
        );
        assert_eq!(invocation.command_line(), "/opt/tools/7za a out.zip");
    }

    #[test]
    fn test_command_line_without_args() {
        let invocation = ToolInvocation::new("/bin/true", vec![]);
        assert_eq!(invocation.command_line(), "/bin/true");
    }
}
