//! In-memory notification log shared between the client and its caller

use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub level: Level,
    pub text: String,
}

/// Cloneable handle; all clones see the same entries
#[derive(Debug, Clone, Default)]
pub struct Messages {
    entries: Arc<Mutex<Vec<Message>>>,
}

impl Messages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, text: impl Into<String>) {
        self.push(Level::Info, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(Level::Error, text.into());
    }

    /// Snapshot of every entry, oldest first
    pub fn entries(&self) -> Vec<Message> {
        self.lock().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|m| m.level == Level::Error)
            .map(|m| m.text.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn push(&self, level: Level, text: String) {
        self.lock().push(Message { level, text });
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Message>> {
        // Entries are plain pushes, so a poisoned lock is still consistent
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}
