use crate::error::IndexOutOfBounds;
use crate::handles::Shared;
use crate::slots::Slots;

/// What an append does when every slot is taken.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum GrowthPolicy {
    /// Reallocate to `max(1, capacity * 2)`.
    #[default]
    Doubling,
    /// Never grow; appending to a full list is a contract violation and panics.
    Fixed,
}

/// Ordered list of shared handles.
///
/// The list is one holder among possibly many for each element. Copying a
/// list (`Clone`) is shallow: the copy aliases the same records.
pub struct SharedList<T> {
    slots: Slots<Shared<T>>,
    policy: GrowthPolicy,
}

impl<T> SharedList<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_policy(capacity, GrowthPolicy::Doubling)
    }

    /// List for small, known-bounded sets. See [`GrowthPolicy::Fixed`].
    pub fn fixed(capacity: usize) -> Self {
        Self::with_policy(capacity, GrowthPolicy::Fixed)
    }

    pub fn with_policy(capacity: usize, policy: GrowthPolicy) -> Self {
        SharedList {
            slots: Slots::with_capacity(capacity),
            policy,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    pub fn is_full(&self) -> bool {
        self.slots.is_full()
    }

    /// Appends another holder of `handle`'s record.
    ///
    /// # Panics
    ///
    /// Panics if the list is full and its policy is [`GrowthPolicy::Fixed`].
    pub fn append(&mut self, handle: Shared<T>) {
        if self.slots.is_full() {
            match self.policy {
                GrowthPolicy::Doubling => self.slots.resize(self.slots.doubled_capacity()),
                GrowthPolicy::Fixed => panic!(
                    "append to a full fixed-capacity list (capacity {})",
                    self.capacity()
                ),
            }
        }
        if self.slots.push(handle).is_err() {
            unreachable!("slot available after growth");
        }
    }

    pub fn at(&self, index: usize) -> Result<&Shared<T>, IndexOutOfBounds> {
        self.slots.at(index)
    }

    pub fn get(&self, index: usize) -> Option<&Shared<T>> {
        self.slots.get(index)
    }

    /// Reallocates to `new_capacity`. Shrinking below `len` releases the tail.
    pub fn resize(&mut self, new_capacity: usize) {
        self.slots.resize(new_capacity);
    }

    /// Removes the first slot holding `handle`'s record, preserving order.
    ///
    /// Returns the released holder, or `None` if the record is not listed.
    pub fn remove(&mut self, handle: &Shared<T>) -> Option<Shared<T>> {
        let index = self.slots.position(|h| Shared::ptr_eq(h, handle))?;
        self.slots.remove_at(index)
    }

    pub fn contains(&self, handle: &Shared<T>) -> bool {
        self.iter().any(|h| Shared::ptr_eq(h, handle))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shared<T>> + '_ {
        self.slots.iter()
    }

    /// Read-only view over the current handles.
    ///
    /// The view borrows the list, so the list cannot be appended to or resized
    /// while the view is alive.
    pub fn as_view(&self) -> ListView<'_, T> {
        ListView {
            slots: self.slots.occupied(),
        }
    }
}

impl<T> Default for SharedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SharedList<T> {
    fn clone(&self) -> Self {
        SharedList {
            slots: self.slots.clone(),
            policy: self.policy,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SharedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedList")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("policy", &self.policy)
            .field("items", &self.as_view())
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a SharedList<T> {
    type Item = &'a Shared<T>;
    type IntoIter = ListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_view().iter()
    }
}

/// Borrowed, restartable view over a [`SharedList`].
pub struct ListView<'a, T> {
    slots: &'a [Option<Shared<T>>],
}

impl<'a, T> ListView<'a, T> {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> ListIter<'a, T> {
        ListIter {
            inner: self.slots.iter(),
        }
    }
}

impl<T> Clone for ListView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListView<'_, T> {}

impl<'a, T> IntoIterator for ListView<'a, T> {
    type Item = &'a Shared<T>;
    type IntoIter = ListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ListView<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct ListIter<'a, T> {
    inner: std::slice::Iter<'a, Option<Shared<T>>>,
}

impl<'a, T> Iterator for ListIter<'a, T> {
    type Item = &'a Shared<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().flatten().next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.inner.len()))
    }
}
