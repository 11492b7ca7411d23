use serde::{Deserialize, Serialize};
use std::path::Path;

/// A fully assembled runner command: executable plus ordered arguments.
///
/// Arguments are kept exactly as the dialect produced them, including empty
/// strings from empty list flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerInvocation {
    pub executable: String,
    pub args: Vec<String>,
}

impl RunnerInvocation {
    pub fn new(executable: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            executable: executable.into(),
            args,
        }
    }

    pub fn executable_path(&self) -> &Path {
        Path::new(&self.executable)
    }

    /// Render the invocation as a single shell-like line for display.
    ///
    /// Arguments are printed as-is since the assembly and flag formatters already
    /// quote their values; only empty arguments are shown as `""`.
    pub fn to_shell_command(&self) -> String {
        let mut cmd = String::new();
        if self.executable.contains(' ') {
            cmd.push_str(&format!("\"{}\"", self.executable));
        } else {
            cmd.push_str(&self.executable);
        }
        for arg in &self.args {
            cmd.push(' ');
            if arg.is_empty() {
                cmd.push_str("\"\"");
            } else {
                cmd.push_str(arg);
            }
        }
        cmd
    }
}
