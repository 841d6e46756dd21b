use std::collections::HashMap;

use crate::core::Handle;

/// Owner of the live objects behind one kind of handle.
///
/// Lookup by a null or stale handle returns `None`; the bridge entry points
/// translate that into the "does not exist" error for the argument in
/// question before any other work happens.
pub struct Registry<H: Handle, T> {
    items: HashMap<H, T>,
    next_id: u32,
}

impl<H: Handle, T> Registry<H, T> {
    /// Creates a new empty registry
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            next_id: 1, // 0 is the null handle
        }
    }

    /// Adds an item and returns its freshly minted handle
    pub fn add(&mut self, item: T) -> H {
        let handle = H::from_id(self.next_id);
        self.next_id += 1;
        self.items.insert(handle, item);
        handle
    }

    /// Gets a reference to an item by its handle
    pub fn get(&self, handle: H) -> Option<&T> {
        self.items.get(&handle)
    }

    /// Gets a mutable reference to an item by its handle
    pub fn get_mut(&mut self, handle: H) -> Option<&mut T> {
        self.items.get_mut(&handle)
    }

    /// Returns whether the handle refers to a live item
    pub fn contains(&self, handle: H) -> bool {
        self.items.contains_key(&handle)
    }

    /// Removes an item, returning it if the handle was live
    pub fn remove(&mut self, handle: H) -> Option<T> {
        self.items.remove(&handle)
    }

    /// Returns the number of live items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the handles of all live items
    pub fn handles(&self) -> Vec<H> {
        self.items.keys().copied().collect()
    }
}

impl<H: Handle, T> Default for Registry<H, T> {
    fn default() -> Self {
        Self::new()
    }
}
