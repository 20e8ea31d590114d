use std::fmt;

use slab::Slab;

/// Stable identifier for an object living in an [`Arena`].
///
/// An `ObjectId` pairs a slot index with the generation the slot had when
/// the object was inserted. Once the object is removed, the slot's
/// generation advances and every outstanding id for it becomes stale:
/// [`Arena::get`] returns `None` instead of handing out a recycled object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId {
    index: usize,
    generation: u64,
}

impl ObjectId {
    /// Slot index inside the arena.
    pub fn index(self) -> usize {
        self.index
    }

    /// Generation at insertion time.
    pub fn generation(self) -> u64 {
        self.generation
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

/// Generational arena for toolkit-owned objects referenced by events.
///
/// Events carry weak references ([`WindowRef`](crate::WindowRef),
/// [`ScrollBarRef`](crate::ScrollBarRef)) rather than pointers, because the
/// referenced object may be destroyed between the event being queued and
/// being dispatched. The consumer keeps the live objects in an `Arena` and
/// validates each reference with [`get`](Self::get) before use; a stale
/// reference simply yields `None`.
///
/// # Example
///
/// ```rust
/// use eventport::Arena;
///
/// let mut windows = Arena::new();
/// let id = windows.insert("main window");
/// assert_eq!(windows.get(id), Some(&"main window"));
///
/// windows.remove(id);
/// assert_eq!(windows.get(id), None);
/// ```
#[derive(Debug, Clone)]
pub struct Arena<T> {
    slots: Slab<Entry<T>>,
    next_generation: u64,
}

#[derive(Debug, Clone)]
struct Entry<T> {
    generation: u64,
    value: T,
}

impl<T> Arena<T> {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            slots: Slab::new(),
            next_generation: 0,
        }
    }

    /// Insert an object and return its stable identifier.
    pub fn insert(&mut self, value: T) -> ObjectId {
        let generation = self.next_generation;
        self.next_generation += 1;
        let index = self.slots.insert(Entry { generation, value });
        ObjectId { index, generation }
    }

    /// Look up an object, validating that it is still alive.
    ///
    /// Returns `None` if the object was removed, even when the slot has
    /// since been reused for another object.
    pub fn get(&self, id: ObjectId) -> Option<&T> {
        self.slots
            .get(id.index)
            .filter(|entry| entry.generation == id.generation)
            .map(|entry| &entry.value)
    }

    /// Mutable variant of [`get`](Self::get).
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut T> {
        self.slots
            .get_mut(id.index)
            .filter(|entry| entry.generation == id.generation)
            .map(|entry| &mut entry.value)
    }

    /// Whether the identified object is still alive.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.get(id).is_some()
    }

    /// Remove an object, returning it if the identifier was still valid.
    pub fn remove(&mut self, id: ObjectId) -> Option<T> {
        match self.slots.get(id.index) {
            Some(entry) if entry.generation == id.generation => {
                Some(self.slots.remove(id.index).value)
            }
            _ => None,
        }
    }

    /// Number of live objects.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the arena holds no objects.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Arena::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_remove() {
        let mut arena = Arena::new();
        let a = arena.insert(1u32);
        let b = arena.insert(2u32);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a), Some(&1));
        assert_eq!(arena.get_mut(b).map(|v| std::mem::replace(v, 3)), Some(2));
        assert_eq!(arena.remove(b), Some(3));
        assert_eq!(arena.get(b), None);
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn stale_id_after_slot_reuse() {
        let mut arena = Arena::new();
        let old = arena.insert("old");
        arena.remove(old);

        // The slab reuses the freed slot, but the generation differs.
        let new = arena.insert("new");
        assert_eq!(old.index(), new.index());
        assert!(!arena.contains(old));
        assert_eq!(arena.get(old), None);
        assert_eq!(arena.get(new), Some(&"new"));

        // Removing through the stale id must not evict the new occupant.
        assert_eq!(arena.remove(old), None);
        assert_eq!(arena.get(new), Some(&"new"));
    }
}
