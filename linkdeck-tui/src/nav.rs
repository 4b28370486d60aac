//! Category tab navigation.
//!
//! Tabs are shown in alphabetical order regardless of the order the
//! categories appear in the document.

/// The tab strip for one frame: sorted names plus the active position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTabs<'a> {
    names: Vec<&'a str>,
    active: usize,
}

impl<'a> CategoryTabs<'a> {
    /// Build tabs from sorted names. An unknown or missing active name
    /// falls back to the first tab.
    pub fn new(names: Vec<&'a str>, active: Option<&str>) -> Self {
        let active = active
            .and_then(|name| names.iter().position(|n| *n == name))
            .unwrap_or(0);
        Self { names, active }
    }

    pub fn names(&self) -> &[&'a str] {
        &self.names
    }

    pub fn index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> Option<&'a str> {
        self.names.get(self.active).copied()
    }

    pub fn at(&self, index: usize) -> Option<&'a str> {
        self.names.get(index).copied()
    }

    pub fn next(&self) -> Option<&'a str> {
        if self.names.is_empty() {
            return None;
        }
        let next = (self.active + 1) % self.names.len();
        self.at(next)
    }

    pub fn previous(&self) -> Option<&'a str> {
        if self.names.is_empty() {
            return None;
        }
        let prev = if self.active == 0 {
            self.names.len() - 1
        } else {
            self.active - 1
        };
        self.at(prev)
    }
}

/// Step a row selection down, wrapping at the end.
pub fn next_row(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match selected {
        Some(i) if i + 1 < len => i + 1,
        Some(_) => 0,
        None => 0,
    })
}

/// Step a row selection up, wrapping at the start.
pub fn previous_row(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match selected {
        Some(0) | None => len - 1,
        Some(i) => (i - 1).min(len - 1),
    })
}
