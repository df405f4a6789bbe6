// Console lines around a batch run: section headers, the banner, failures

use colored::Colorize;

/// Whether console lines get ANSI colors
///
/// Colors are only used when the target stream is a terminal, so redirected
/// output stays plain text.
pub struct OutputStyle {
    pub use_colors: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self::for_stdout()
    }
}

impl OutputStyle {
    pub fn for_stdout() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }

    pub fn for_stderr() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stderr),
        }
    }

    fn marked(&self, mark: &str, msg: &str, paint: fn(&str) -> colored::ColoredString) -> String {
        if self.use_colors {
            format!("{} {}", paint(mark), msg)
        } else {
            format!("{} {}", mark, msg)
        }
    }

    /// `✓ msg`, green mark
    pub fn success(&self, msg: &str) -> String {
        self.marked("✓", msg, |m| m.green().bold())
    }

    /// `✗ msg`, red mark
    pub fn error(&self, msg: &str) -> String {
        self.marked("✗", msg, |m| m.red().bold())
    }

    /// `⚠ msg`, yellow mark
    pub fn warning(&self, msg: &str) -> String {
        self.marked("⚠", msg, |m| m.yellow())
    }

    /// Section title such as "Arguments passed:"
    pub fn header(&self, title: &str) -> String {
        if self.use_colors {
            title.bold().to_string()
        } else {
            title.to_string()
        }
    }

    /// Indented bullet, used for failed directories
    pub fn list_item(&self, item: &str) -> String {
        format!("  • {}", item)
    }
}

pub fn print_success(msg: &str) {
    println!("{}", OutputStyle::for_stdout().success(msg));
}

/// Pipeline errors go to stderr
pub fn print_error(msg: &str) {
    eprintln!("{}", OutputStyle::for_stderr().error(msg));
}

pub fn print_warning(msg: &str) {
    println!("{}", OutputStyle::for_stdout().warning(msg));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_marks() {
        let style = OutputStyle { use_colors: false };
        assert_eq!(style.success("All installations complete."), "✓ All installations complete.");
        assert_eq!(style.error("Root directory not found"), "✗ Root directory not found");
        assert_eq!(style.warning("1 of 3 directories failed"), "⚠ 1 of 3 directories failed");
        assert_eq!(style.header("Installation progress:"), "Installation progress:");
    }

    #[test]
    fn test_list_item_formatting() {
        let style = OutputStyle { use_colors: false };
        assert_eq!(style.list_item("packages/web"), "  • packages/web");
    }

    #[test]
    fn test_colored_lines_keep_text() {
        let style = OutputStyle { use_colors: true };
        assert!(style.header("Missing arguments:").contains("Missing arguments:"));
        assert!(style.success("done").ends_with(" done"));
    }
}
