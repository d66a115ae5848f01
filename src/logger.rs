/// Severity of a single logger line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Msg,
    Warning,
    Error,
}

/// Leveled output sink shared by the dispatcher and every plugin.
///
/// All user-facing detail flows through this trait; a plugin's boolean
/// execute result only signals whether the operation completed.
pub trait Logger {
    fn write_line(&self, level: LogLevel, message: &str);

    /// Render a failure with its full context chain.
    fn write_error(&self, error: &anyhow::Error);
}

/// Production logger: informational lines to stdout, warnings and errors
/// to stderr.
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn write_line(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Msg => println!("{}", message),
            LogLevel::Warning => eprintln!("Warning: {}", message),
            LogLevel::Error => eprintln!("Error: {}", message),
        }
    }

    fn write_error(&self, error: &anyhow::Error) {
        eprintln!("Error: {:#}", error);
    }
}

/// Recording logger for tests.
#[cfg(test)]
pub struct MemoryLogger {
    lines: std::cell::RefCell<Vec<(LogLevel, String)>>,
}

#[cfg(test)]
impl MemoryLogger {
    pub fn new() -> Self {
        Self {
            lines: std::cell::RefCell::new(Vec::new()),
        }
    }

    pub fn lines(&self) -> Vec<(LogLevel, String)> {
        self.lines.borrow().clone()
    }

    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

#[cfg(test)]
impl Logger for MemoryLogger {
    fn write_line(&self, level: LogLevel, message: &str) {
        self.lines.borrow_mut().push((level, message.to_string()));
    }

    fn write_error(&self, error: &anyhow::Error) {
        self.lines
            .borrow_mut()
            .push((LogLevel::Error, format!("{:#}", error)));
    }
}
