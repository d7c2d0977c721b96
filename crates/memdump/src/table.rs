use memdump_core::ProcessInfo;

pub struct TableFormatter {
    pid_width: usize,
    name_width: usize,
    memory_width: usize,
}

impl TableFormatter {
    pub fn new(processes: &[ProcessInfo]) -> Self {
        let name_width = processes
            .iter()
            .map(|p| p.name.chars().count())
            .max()
            .unwrap_or(16)
            .clamp(4, 40); // Between "Name" header min and reasonable terminal width max

        Self {
            pid_width: 8,
            name_width,
            memory_width: 10,
        }
    }

    pub fn print_table(&self, processes: &[ProcessInfo]) {
        self.print_header();
        for process in processes {
            self.print_row(process);
        }
        self.print_footer();
    }

    fn print_header(&self) {
        println!("{}", self.top_border());
        println!("{}", self.header_row());
        println!("{}", self.separator());
    }

    fn print_footer(&self) {
        println!("{}", self.bottom_border());
    }

    fn print_row(&self, process: &ProcessInfo) {
        let memory = format!("{} MB", process.memory_mb());

        println!(
            "│ {:>width_pid$} │ {:<width_name$} │ {:>width_memory$} │",
            process.pid,
            truncate(&process.name, self.name_width),
            truncate(&memory, self.memory_width),
            width_pid = self.pid_width,
            width_name = self.name_width,
            width_memory = self.memory_width,
        );
    }

    fn top_border(&self) -> String {
        format!(
            "┌{}┬{}┬{}┐",
            "─".repeat(self.pid_width + 2),
            "─".repeat(self.name_width + 2),
            "─".repeat(self.memory_width + 2),
        )
    }

    fn header_row(&self) -> String {
        format!(
            "│ {:>width_pid$} │ {:<width_name$} │ {:>width_memory$} │",
            "PID",
            "Name",
            "Memory",
            width_pid = self.pid_width,
            width_name = self.name_width,
            width_memory = self.memory_width,
        )
    }

    fn separator(&self) -> String {
        format!(
            "├{}┼{}┼{}┤",
            "─".repeat(self.pid_width + 2),
            "─".repeat(self.name_width + 2),
            "─".repeat(self.memory_width + 2),
        )
    }

    fn bottom_border(&self) -> String {
        format!(
            "└{}┴{}┴{}┘",
            "─".repeat(self.pid_width + 2),
            "─".repeat(self.name_width + 2),
            "─".repeat(self.memory_width + 2),
        )
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings
/// including multi-byte characters.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
