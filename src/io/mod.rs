//! Output abstraction
//!
//! Presenters write through [`OutputWriter`] so reports can be captured in
//! tests instead of going to the terminal.

/// Trait for writing output to the user
pub trait OutputWriter {
    /// Write a message without a newline
    fn write(&mut self, message: &str);
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Terminal output implementation using stdout
pub struct TerminalOutput;

impl OutputWriter for TerminalOutput {
    fn write(&mut self, message: &str) {
        print!("{}", message);
    }

    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Output writer that keeps everything in memory.
#[derive(Debug, Default)]
pub struct BufferedOutput {
    buffer: String,
}

impl BufferedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn lines(&self) -> Vec<&str> {
        self.buffer.lines().collect()
    }
}

impl OutputWriter for BufferedOutput {
    fn write(&mut self, message: &str) {
        self.buffer.push_str(message);
    }

    fn writeln(&mut self, message: &str) {
        self.buffer.push_str(message);
        self.buffer.push('\n');
    }
}
