//! Dense component tables kept sorted by owning entity.

use super::entity::EntityId;

/// Parallel arrays of owner IDs and component values, sorted by owner.
///
/// At most one record per entity. Insertion uses binary search so the sort
/// order holds no matter which entity a component is attached to.
#[derive(Debug, Clone)]
pub struct ComponentTable<T> {
    owners: Vec<EntityId>,
    values: Vec<T>,
}

impl<T> Default for ComponentTable<T> {
    fn default() -> Self {
        Self {
            owners: Vec::new(),
            values: Vec::new(),
        }
    }
}

impl<T> ComponentTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Insert `value` for `owner` at its sorted position.
    ///
    /// Returns false (and leaves the table untouched) if `owner` already has
    /// a record.
    pub fn insert(&mut self, owner: EntityId, value: T) -> bool {
        match self.owners.binary_search(&owner) {
            Ok(_) => false,
            Err(pos) => {
                self.owners.insert(pos, owner);
                self.values.insert(pos, value);
                true
            }
        }
    }

    pub fn get(&self, owner: EntityId) -> Option<&T> {
        self.owners
            .binary_search(&owner)
            .ok()
            .map(|pos| &self.values[pos])
    }

    pub fn get_mut(&mut self, owner: EntityId) -> Option<&mut T> {
        self.owners
            .binary_search(&owner)
            .ok()
            .map(move |pos| &mut self.values[pos])
    }

    pub fn contains(&self, owner: EntityId) -> bool {
        self.owners.binary_search(&owner).is_ok()
    }

    pub fn owners(&self) -> &[EntityId] {
        &self.owners
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &T)> {
        self.owners.iter().copied().zip(self.values.iter())
    }

    /// Forward-only cursor used by the merge-join scan.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            owners: &self.owners,
            values: self.values.iter_mut(),
            pos: 0,
        }
    }
}

/// Forward cursor over a [`ComponentTable`].
///
/// Each record is handed out at most once, which is what lets the cursor
/// give out `&'a mut T` for the full borrow of the table.
pub struct CursorMut<'a, T> {
    owners: &'a [EntityId],
    values: std::slice::IterMut<'a, T>,
    pos: usize,
}

impl<'a, T> CursorMut<'a, T> {
    /// Advance past every record owned by an entity below `owner` and return
    /// the record for `owner`, if the table has one.
    ///
    /// Callers must seek in ascending entity order.
    pub fn seek(&mut self, owner: EntityId) -> Option<&'a mut T> {
        while self.pos < self.owners.len() && self.owners[self.pos] < owner {
            self.pos += 1;
            self.values.next();
        }
        if self.pos < self.owners.len() && self.owners[self.pos] == owner {
            self.pos += 1;
            self.values.next()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u32) -> EntityId {
        EntityId::from_raw(raw)
    }

    #[test]
    fn test_insert_keeps_owners_sorted() {
        let mut table = ComponentTable::new();
        for raw in [5, 1, 9, 3, 7] {
            assert!(table.insert(id(raw), raw * 10));
        }
        let owners: Vec<_> = table.owners().iter().map(|e| e.raw()).collect();
        assert_eq!(owners, vec![1, 3, 5, 7, 9]);
        assert_eq!(table.get(id(7)), Some(&70));
        assert!(table.contains(id(3)));
        assert!(!table.contains(id(4)));
        if let Some(value) = table.get_mut(id(9)) {
            *value += 1;
        }
        assert_eq!(table.get(id(9)), Some(&91));
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let mut table = ComponentTable::new();
        assert!(table.insert(id(2), "a"));
        assert!(!table.insert(id(2), "b"));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(id(2)), Some(&"a"));
    }

    #[test]
    fn test_cursor_skips_missing_owners() {
        let mut table = ComponentTable::new();
        table.insert(id(2), 20);
        table.insert(id(4), 40);
        table.insert(id(6), 60);

        let mut cursor = table.cursor_mut();
        assert_eq!(cursor.seek(id(1)), None);
        assert_eq!(cursor.seek(id(4)).copied(), Some(40));
        assert_eq!(cursor.seek(id(5)), None);
        if let Some(value) = cursor.seek(id(6)) {
            *value += 1;
        }
        assert_eq!(cursor.seek(id(7)), None);
        assert_eq!(table.get(id(6)), Some(&61));
    }
}
