use std::{
    io::Write,
    sync::{Arc, Mutex, PoisonError},
};

/// Console abstraction the logger writes rendered lines to.
pub trait LogWriter {
    fn regular(&mut self, line: &str);
    fn flush(&mut self);
}

impl<W: LogWriter + ?Sized> LogWriter for Box<W> {
    fn regular(&mut self, line: &str) {
        (**self).regular(line);
    }

    fn flush(&mut self) {
        (**self).flush();
    }
}

/// Writes each line to stdout. Write errors are ignored.
#[derive(Default, Debug)]
pub struct LogStdout;

impl LogWriter for LogStdout {
    fn regular(&mut self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{line}");
        let _ = stdout.flush();
    }

    fn flush(&mut self) {
        let _ = std::io::stdout().flush();
    }
}

/// Keeps every line in memory. Clones share the same storage, so a host can
/// hand one clone to the logger and read the other.
#[derive(Default, Debug, Clone)]
pub struct LogMemory {
    lines: Arc<Mutex<Vec<String>>>,
}

impl LogMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl LogWriter for LogMemory {
    fn regular(&mut self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }

    fn flush(&mut self) {}
}

#[test]
fn test_log_memory() {
    let memory = LogMemory::new();
    let mut writer = memory.clone();
    writer.regular("Hello, world!");
    writer.regular("rust is awesome !");
    writer.flush();
    assert_eq!(memory.lines(), vec!["Hello, world!", "rust is awesome !"]);
    memory.clear();
    assert!(memory.is_empty());
}

#[test]
fn test_boxed_writer() {
    let memory = LogMemory::new();
    let mut writer: Box<dyn LogWriter + Send> = Box::new(memory.clone());
    writer.regular("boxed");
    assert_eq!(memory.len(), 1);
}

#[test]
fn test_log_stdout() {
    let mut log_stdout = LogStdout;
    log_stdout.regular("Hello, world!");
    log_stdout.regular("test");
    log_stdout.flush();
}
