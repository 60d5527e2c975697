/// Whether the document holds changes that have not reached disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChangeTracker {
    #[default]
    Clean,
    Dirty,
}

impl ChangeTracker {
    pub fn mark_dirty(&mut self) {
        *self = ChangeTracker::Dirty;
    }

    /// Only a successful save clears the flag; a failed one leaves it alone.
    pub fn record_save<T, E>(&mut self, result: &Result<T, E>) {
        if result.is_ok() {
            *self = ChangeTracker::Clean;
        }
    }

    pub fn is_dirty(self) -> bool {
        matches!(self, ChangeTracker::Dirty)
    }
}
