use crate::location::LocationRecord;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum RecentIntent {
    /// A catalog item was tapped. Inserts it at the front, or moves an
    /// existing equal entry to the front.
    Select(LocationRecord),
    /// A recent chip was dismissed. Absent entries are ignored.
    Remove(LocationRecord),
    /// Replace the whole list with entries restored from storage.
    Restore(Vec<LocationRecord>),
}

impl Intent for RecentIntent {}
