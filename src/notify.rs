use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Warning,
    Failure,
}

impl Level {
    pub fn label(&self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Warning => "warning",
            Level::Failure => "failure",
        }
    }
}

/// Short user-facing messages about the outcome of an operation.
pub trait Notifier {
    fn success(&mut self, message: &str);

    fn warning(&mut self, message: &str);

    fn failure(&mut self, message: &str);
}

/// Prints successes to stdout, everything else to stderr.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    fn print(level: Level, message: &str) {
        let line = format!("[{}] {}", level.label(), message);

        let result = match level {
            Level::Success => writeln!(io::stdout(), "{line}"),
            Level::Warning | Level::Failure => writeln!(io::stderr(), "{line}"),
        };
        if let Err(e) = result {
            log::warn!("could not print notification: {}", e);
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn success(&mut self, message: &str) {
        Self::print(Level::Success, message);
    }

    fn warning(&mut self, message: &str) {
        Self::print(Level::Warning, message);
    }

    fn failure(&mut self, message: &str) {
        Self::print(Level::Failure, message);
    }
}

/// Keeps every notification in the order it was sent.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    messages: Vec<(Level, String)>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[(Level, String)] {
        &self.messages
    }
}

impl Notifier for MemoryNotifier {
    fn success(&mut self, message: &str) {
        self.messages.push((Level::Success, message.to_string()));
    }

    fn warning(&mut self, message: &str) {
        self.messages.push((Level::Warning, message.to_string()));
    }

    fn failure(&mut self, message: &str) {
        self.messages.push((Level::Failure, message.to_string()));
    }
}
