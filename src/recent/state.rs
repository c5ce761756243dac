use crate::location::LocationRecord;
use crate::mvi::UiState;

/// Ordered, deduplicated recency stack. Index 0 is the most recent selection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecentList {
    entries: Vec<LocationRecord>,
}

impl UiState for RecentList {}

impl RecentList {
    /// Build a list from entries ordered most recent first.
    ///
    /// Later duplicates are dropped, keeping the most recent occurrence.
    pub fn from_entries(entries: Vec<LocationRecord>) -> Self {
        let mut deduped: Vec<LocationRecord> = Vec::with_capacity(entries.len());
        for entry in entries {
            if !deduped.contains(&entry) {
                deduped.push(entry);
            }
        }
        Self { entries: deduped }
    }

    pub fn entries(&self) -> &[LocationRecord] {
        &self.entries
    }

    pub fn position(&self, location: &LocationRecord) -> Option<usize> {
        self.entries.iter().position(|entry| entry == location)
    }

    pub fn contains(&self, location: &LocationRecord) -> bool {
        self.position(location).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn most_recent(&self) -> Option<&LocationRecord> {
        self.entries.first()
    }

    pub(super) fn promote(&mut self, location: LocationRecord) {
        match self.position(&location) {
            Some(0) => {}
            Some(index) => {
                let entry = self.entries.remove(index);
                self.entries.insert(0, entry);
            }
            None => self.entries.insert(0, location),
        }
    }

    pub(super) fn discard(&mut self, location: &LocationRecord) {
        if let Some(index) = self.position(location) {
            self.entries.remove(index);
        }
    }
}
