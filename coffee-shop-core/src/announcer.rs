use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
};

/// Where the shop calls out its orders.
pub trait Announcer: Send + Sync + 'static {
    fn announce(&self, line: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutAnnouncer;

impl Announcer for StdoutAnnouncer {
    fn announce(&self, line: &str) {
        // A closed stdout (e.g. `| head`) silences the demo instead of panicking.
        let _ = writeln!(io::stdout().lock(), "{}", line);
    }
}

/// Keeps every announced line, for inspection in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryAnnouncer {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryAnnouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Announcer for MemoryAnnouncer {
    fn announce(&self, line: &str) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        lines.push(line.to_string());
    }
}
