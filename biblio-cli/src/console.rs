//! Terminal input/output used by the interactive shell

use colored::Colorize;
use std::io::{self, BufRead, Write};

/// How a line of text should look; resolved by the console implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Emphasis,
    Title,
    Success,
    Warn,
    Error,
    Muted,
}

/// The capabilities the shell needs from a terminal
pub trait Console {
    /// Write text without a line break
    fn write(&mut self, style: Style, text: &str);

    /// Read one line of input without its line terminator, `None` at end of input
    fn read_line(&mut self) -> Option<String>;

    /// Clear the visible screen
    fn clear(&mut self);

    /// Write a full line
    fn print(&mut self, style: Style, text: &str) {
        self.write(style, text);
        self.write(Style::Plain, "\n");
    }

    /// Show a label and read the answer
    fn prompt(&mut self, label: &str) -> Option<String> {
        self.write(Style::Success, label);
        self.read_line()
    }

    /// Wait until the user presses Enter
    fn pause(&mut self) {
        self.write(Style::Muted, "Press Enter to continue...");
        let _ = self.read_line();
    }
}

/// Console backed by stdin/stdout
pub struct Terminal {
    stdin: io::Stdin,
}

impl Terminal {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for Terminal {
    fn write(&mut self, style: Style, text: &str) {
        let styled = match style {
            Style::Plain => text.normal(),
            Style::Emphasis => text.cyan().bold(),
            Style::Title => text.white().on_blue().bold(),
            Style::Success => text.green(),
            Style::Warn => text.yellow(),
            Style::Error => text.red(),
            Style::Muted => text.dimmed(),
        };
        let mut stdout = io::stdout();
        let _ = write!(stdout, "{}", styled);
        let _ = stdout.flush();
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.stdin.lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                tracing::warn!("Failed to read input: {}", e);
                None
            }
        }
    }

    fn clear(&mut self) {
        use crossterm::{cursor::MoveTo, execute, terminal::Clear, terminal::ClearType};

        if let Err(e) = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0)) {
            tracing::debug!("Failed to clear screen: {}", e);
        }
    }
}

/// In-memory console fed from a script of input lines (for testing)
#[cfg(test)]
pub struct ScriptedConsole {
    input: std::collections::VecDeque<String>,
    /// Everything written, without styling
    pub output: String,
    /// Number of times the screen was cleared
    pub clears: usize,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: input.into_iter().map(Into::into).collect(),
            output: String::new(),
            clears: 0,
        }
    }

    /// Input lines not consumed yet
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn write(&mut self, _style: Style, text: &str) {
        self.output.push_str(text);
    }

    fn read_line(&mut self) -> Option<String> {
        let line = self.input.pop_front();
        if let Some(line) = &line {
            self.output.push_str(line);
            self.output.push('\n');
        }
        line
    }

    fn clear(&mut self) {
        self.clears += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_and_pause() {
        let mut console = ScriptedConsole::new(["answer", ""]);
        assert_eq!(console.prompt("Name: ").as_deref(), Some("answer"));
        console.pause();

        assert_eq!(console.remaining(), 0);
        assert!(console.output.contains("Name: answer\n"));
        assert!(console.output.contains("Press Enter"));
        assert_eq!(console.read_line(), None);
    }
}
