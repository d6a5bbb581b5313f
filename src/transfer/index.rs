use std::collections::HashSet;

/// Membership index over the destination library, used to suppress
/// duplicate adds.
///
/// Seeded once from the full library scan, then grows as tracks are added
/// during the run. Append-only: there is no removal, an id once present
/// stays present for the lifetime of the run.
#[derive(Debug, Default)]
pub struct LibraryIndex {
    ids: HashSet<String>,
}

impl LibraryIndex {
    pub fn new(ids: impl IntoIterator<Item = String>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Records an id as present. Idempotent.
    pub fn mark_added(&mut self, id: String) {
        self.ids.insert(id);
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
