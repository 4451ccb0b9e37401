use crate::error::IndexOutOfBounds;

/// Fixed-size backing store shared by the list types.
///
/// Slots `0..len` are always occupied, slots `len..capacity` are always empty.
#[derive(Debug, Clone)]
pub(crate) struct Slots<P> {
    slots: Box<[Option<P>]>,
    len: usize,
}

impl<P> Slots<P> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Slots {
            slots: empty_slots(capacity),
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Capacity the next doubling step grows to.
    pub(crate) fn doubled_capacity(&self) -> usize {
        self.capacity().saturating_mul(2).max(1)
    }

    /// Reallocates to `new_capacity`, keeping the first `min(new_capacity, len)`
    /// entries. Shrinking below `len` drops the tail.
    pub(crate) fn resize(&mut self, new_capacity: usize) {
        let keep = new_capacity.min(self.len);
        let mut next = empty_slots(new_capacity);
        for (dst, src) in next.iter_mut().zip(self.slots[..keep].iter_mut()) {
            *dst = src.take();
        }
        self.slots = next;
        self.len = keep;
    }

    /// Stores `value` in the next free slot. Hands it back when there is none.
    pub(crate) fn push(&mut self, value: P) -> Result<(), P> {
        if self.is_full() {
            return Err(value);
        }
        self.slots[self.len] = Some(value);
        self.len += 1;
        Ok(())
    }

    pub(crate) fn get(&self, index: usize) -> Option<&P> {
        if index >= self.len {
            return None;
        }
        self.slots[index].as_ref()
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut P> {
        if index >= self.len {
            return None;
        }
        self.slots[index].as_mut()
    }

    pub(crate) fn at(&self, index: usize) -> Result<&P, IndexOutOfBounds> {
        self.get(index).ok_or(IndexOutOfBounds {
            index,
            len: self.len,
        })
    }

    pub(crate) fn occupied(&self) -> &[Option<P>] {
        &self.slots[..self.len]
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &P> + '_ {
        self.occupied().iter().flatten()
    }

    pub(crate) fn position(&self, mut pred: impl FnMut(&P) -> bool) -> Option<usize> {
        self.iter().position(|p| pred(p))
    }

    /// Takes the entry at `index` out and shifts later entries down by one.
    pub(crate) fn remove_at(&mut self, index: usize) -> Option<P> {
        if index >= self.len {
            return None;
        }
        let taken = self.slots[index].take();
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        taken
    }

    /// Empties every occupied slot; capacity is kept.
    pub(crate) fn clear(&mut self) {
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    /// Moves every entry out, in order, leaving the store empty.
    pub(crate) fn take_all(&mut self) -> Vec<P> {
        let len = std::mem::take(&mut self.len);
        self.slots[..len].iter_mut().filter_map(Option::take).collect()
    }
}

fn empty_slots<P>(capacity: usize) -> Box<[Option<P>]> {
    (0..capacity).map(|_| None).collect()
}
