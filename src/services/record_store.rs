use std::fmt;

/// Position of a record inside a [`RecordStore`].
///
/// Records are never removed, so a handle stays valid for the life of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(usize);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Append-only ordered collection with linear lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore<T> {
    records: Vec<T>,
}

impl<T> RecordStore<T> {
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    pub fn push(&mut self, record: T) -> RecordId {
        self.records.push(record);
        RecordId(self.records.len() - 1)
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.records.get(id.0)
    }

    pub fn get_mut(&mut self, id: RecordId) -> Option<&mut T> {
        self.records.get_mut(id.0)
    }

    /// First record, in insertion order, that satisfies `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<RecordId>
    where
        P: FnMut(&T) -> bool,
    {
        self.records.iter().position(|r| predicate(r)).map(RecordId)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for RecordStore<T> {
    fn from(records: Vec<T>) -> Self {
        Self { records }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_returns_sequential_ids() {
        let mut store = RecordStore::new();
        let a = store.push("a");
        let b = store.push("b");

        assert_ne!(a, b);
        assert_eq!(store.get(a), Some(&"a"));
        assert_eq!(store.get(b), Some(&"b"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_find_returns_first_match() {
        let store = RecordStore::from(vec![("x", 1), ("y", 2), ("x", 3)]);

        let id = store.find(|(name, _)| *name == "x").unwrap();
        assert_eq!(store.get(id), Some(&("x", 1)));
        assert!(store.find(|(name, _)| *name == "z").is_none());
    }

    #[test]
    fn test_get_mut_is_visible_through_same_id() {
        let mut store = RecordStore::new();
        let id = store.push(String::from("before"));

        *store.get_mut(id).unwrap() = String::from("after");
        assert_eq!(store.get(id).map(String::as_str), Some("after"));
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut store = RecordStore::from(vec![3, 1]);
        store.push(2);
        assert_eq!(store.as_slice(), &[3, 1, 2]);
    }
}
