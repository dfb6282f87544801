use stockledger_core::Entity;

/// Ordered record store the reconciler reads and writes.
///
/// This is the minimal surface reconciliation needs: add, replace by id,
/// remove by id and a linear first-match lookup. It is implemented for `Vec<T>`
/// so callers can hand in plain vectors; a persistence-backed type can
/// implement it without changing the reconciler.
pub trait Collection<T: Entity> {
    /// Add a record at the end.
    fn add(&mut self, record: T);

    /// Replace the record with the same id, keeping its position.
    ///
    /// Returns `false` (and stores nothing) when no record has that id.
    fn replace(&mut self, record: T) -> bool;

    /// Remove and return the record with `id`.
    fn remove_by_id(&mut self, id: T::Id) -> Option<T>;

    /// First record, in order, that satisfies `predicate`.
    fn find(&self, predicate: &dyn Fn(&T) -> bool) -> Option<T>;

    /// All records, in order.
    fn list(&self) -> Vec<T>;

    fn count(&self) -> usize;
}

impl<T> Collection<T> for Vec<T>
where
    T: Entity + Clone,
{
    fn add(&mut self, record: T) {
        self.push(record);
    }

    fn replace(&mut self, record: T) -> bool {
        let id = record.id();
        match self.iter_mut().find(|r| r.id() == id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    fn remove_by_id(&mut self, id: T::Id) -> Option<T> {
        let index = self.iter().position(|r| r.id() == id)?;
        Some(self.remove(index))
    }

    fn find(&self, predicate: &dyn Fn(&T) -> bool) -> Option<T> {
        self.iter().find(|r| predicate(r)).cloned()
    }

    fn list(&self) -> Vec<T> {
        self.clone()
    }

    fn count(&self) -> usize {
        self.len()
    }
}
