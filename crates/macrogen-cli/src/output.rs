// Output formatting and styling

use colored::Colorize;

use crate::logging::VerbosityLevel;

/// Output styling configuration
pub struct OutputStyle {
    pub use_colors: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl OutputStyle {
    /// Format success message
    pub fn success(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✓".green().bold(), msg)
        } else {
            format!("✓ {}", msg)
        }
    }

    /// Format error message
    pub fn error(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✗".red().bold(), msg)
        } else {
            format!("✗ {}", msg)
        }
    }

    /// Format warning message
    pub fn warning(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "⚠".yellow(), msg)
        } else {
            format!("⚠ {}", msg)
        }
    }

    /// Format info message
    pub fn info(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "ℹ".blue(), msg)
        } else {
            format!("ℹ {}", msg)
        }
    }

    /// Format a macro name, path or other literal
    pub fn code(&self, code: &str) -> String {
        if self.use_colors {
            code.cyan().to_string()
        } else {
            code.to_string()
        }
    }

    /// Format a value that has not been configured
    pub fn dimmed(&self, text: &str) -> String {
        if self.use_colors {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    /// Format header
    pub fn header(&self, title: &str) -> String {
        if self.use_colors {
            title.bold().to_string()
        } else {
            title.to_string()
        }
    }

    /// Format a key-value pair
    pub fn key_value(&self, key: &str, value: &str) -> String {
        if self.use_colors {
            format!("  {}: {}", key.bold(), value)
        } else {
            format!("  {}: {}", key, value)
        }
    }
}

/// Print formatted output
pub fn print_success(msg: &str) {
    if VerbosityLevel::Normal.should_output() {
        println!("{}", OutputStyle::default().success(msg));
    }
}

pub fn print_error(msg: &str) {
    eprintln!("{}", OutputStyle::default().error(msg));
}

pub fn print_info(msg: &str) {
    if VerbosityLevel::Normal.should_output() {
        println!("{}", OutputStyle::default().info(msg));
    }
}
