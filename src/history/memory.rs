use std::cell::RefCell;

use crate::error::SessionError;

use super::History;

#[derive(Debug)]
struct Entries {
    paths: Vec<String>,
    index: usize,
}

/// History kept entirely in memory.
#[derive(Debug)]
pub struct MemoryHistory {
    entries: RefCell<Entries>,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHistory {
    /// History with a single `/` entry.
    pub fn new() -> Self {
        Self::with_entries(["/"])
    }

    /// History seeded with `paths`, positioned on the last one.
    ///
    /// An empty iterator yields the same history as [`MemoryHistory::new`].
    pub fn with_entries<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut paths: Vec<String> = paths.into_iter().map(Into::into).collect();
        if paths.is_empty() {
            paths.push("/".to_owned());
        }
        let index = paths.len() - 1;
        Self { entries: RefCell::new(Entries { paths, index }) }
    }

    /// Number of entries, including forward entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().paths.len()
    }

    /// Always false: a memory history holds at least one entry.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().paths.is_empty()
    }

    /// Cursor position within [`MemoryHistory::entries`].
    pub fn index(&self) -> usize {
        self.entries.borrow().index
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().paths.clone()
    }

    /// Whether `go(delta)` lands on an existing entry.
    pub fn can_go(&self, delta: i32) -> bool {
        let entries = self.entries.borrow();
        target_index(entries.index, delta, entries.paths.len()).is_some()
    }
}

fn target_index(index: usize, delta: i32, len: usize) -> Option<usize> {
    let step = usize::try_from(delta.unsigned_abs()).ok()?;
    let target = if delta < 0 { index.checked_sub(step)? } else { index.checked_add(step)? };
    (target < len).then_some(target)
}

impl History for MemoryHistory {
    fn location(&self) -> Result<String, SessionError> {
        let entries = self.entries.borrow();
        Ok(entries.paths[entries.index].clone())
    }

    fn push(&self, path: &str) -> Result<(), SessionError> {
        let mut entries = self.entries.borrow_mut();
        let keep = entries.index + 1;
        entries.paths.truncate(keep);
        entries.paths.push(path.to_owned());
        entries.index = keep;
        Ok(())
    }

    fn replace(&self, path: &str) -> Result<(), SessionError> {
        let mut entries = self.entries.borrow_mut();
        let index = entries.index;
        entries.paths[index] = path.to_owned();
        Ok(())
    }

    fn go(&self, delta: i32) -> Result<(), SessionError> {
        let mut entries = self.entries.borrow_mut();
        match target_index(entries.index, delta, entries.paths.len()) {
            Some(target) => entries.index = target,
            None => leptos::logging::warn!("history go({delta}) out of range; ignored"),
        }
        Ok(())
    }
}
