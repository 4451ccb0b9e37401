use std::ops::Deref;

use crate::error::IndexOutOfBounds;
use crate::slots::Slots;

/// Pointer kinds a [`RecordList`] can hold.
///
/// `Box<T>` makes the list the exclusive owner of its records; `&T` makes it
/// an index over records owned somewhere else.
pub trait RecordPtr: Deref {
    const OWNS_RECORDS: bool;
}

impl<T: ?Sized> RecordPtr for Box<T> {
    const OWNS_RECORDS: bool = true;
}

impl<T: ?Sized> RecordPtr for &T {
    const OWNS_RECORDS: bool = false;
}

/// Ordered list of records with removal by identity and bulk destroy.
///
/// An owning list (`RecordList<Box<T>>`) is deliberately not `Clone`: two
/// owners of the same records cannot exist.
pub struct RecordList<P: RecordPtr> {
    slots: Slots<P>,
}

impl<P: RecordPtr> RecordList<P> {
    pub fn new() -> Self {
        RecordList {
            slots: Slots::with_capacity(0),
        }
    }

    /// Whether destroying the list also destroys the records.
    pub fn owns_records(&self) -> bool {
        P::OWNS_RECORDS
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

    pub fn append(&mut self, record: P) {
        if self.slots.is_full() {
            self.slots.resize(self.slots.doubled_capacity());
        }
        if self.slots.push(record).is_err() {
            unreachable!("slot available after growth");
        }
    }

    pub fn at(&self, index: usize) -> Result<&P::Target, IndexOutOfBounds> {
        self.slots.at(index).map(|p| &**p)
    }

    pub fn get(&self, index: usize) -> Option<&P::Target> {
        self.slots.get(index).map(|p| &**p)
    }

    pub fn iter(&self) -> impl Iterator<Item = &P::Target> + '_ {
        self.slots.iter().map(|p| &**p)
    }

    pub fn position(&self, record: *const P::Target) -> Option<usize>
    where
        P::Target: Sized,
    {
        self.slots.position(|p| std::ptr::eq(&**p, record))
    }

    pub fn contains(&self, record: *const P::Target) -> bool
    where
        P::Target: Sized,
    {
        self.position(record).is_some()
    }

    /// First record satisfying `pred`, in list order.
    pub fn find(&self, mut pred: impl FnMut(&P::Target) -> bool) -> Option<&P::Target> {
        self.iter().find(|r| pred(r))
    }

    /// Removes the first slot pointing at `record` and shifts the rest down.
    ///
    /// The removed pointer is returned so the caller decides what happens to
    /// the record. Removing a record that is not listed is a no-op.
    pub fn remove(&mut self, record: *const P::Target) -> Option<P>
    where
        P::Target: Sized,
    {
        let index = self.position(record)?;
        self.slots.remove_at(index)
    }

    /// Drops every pointer and resets `len` to 0; capacity is kept.
    ///
    /// For an owning list this destroys each record exactly once. For a
    /// borrowing list it only forgets the records. Calling it again is a no-op.
    pub fn destroy(&mut self) {
        self.slots.clear();
    }
}

impl<T> RecordList<Box<T>> {
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).map(|b| &mut **b)
    }

    /// Non-owning list over the same records, in the same order.
    pub fn borrow_view(&self) -> RecordList<&T> {
        let mut view = RecordList::new();
        view.slots.resize(self.len());
        for record in self.iter() {
            view.append(record);
        }
        view
    }

    /// Gives every record back to the caller. The list is left empty and
    /// destroys nothing afterwards.
    pub fn into_records(mut self) -> Vec<Box<T>> {
        self.slots.take_all()
    }
}

impl<P: RecordPtr> Default for RecordList<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for RecordList<&T> {
    fn clone(&self) -> Self {
        RecordList {
            slots: self.slots.clone(),
        }
    }
}

impl<P> std::fmt::Debug for RecordList<P>
where
    P: RecordPtr,
    P::Target: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordList")
            .field("owns_records", &P::OWNS_RECORDS)
            .field("capacity", &self.capacity())
            .field("records", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}
