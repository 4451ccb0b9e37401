use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// Shared, mutable handle to a record.
///
/// Every clone of a handle is another holder of the same record; the record is
/// dropped when the last holder goes away. Edits made through one holder are
/// visible through all of them.
pub struct Shared<T>(Rc<RefCell<T>>);

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Shared(Rc::new(RefCell::new(value)))
    }

    /// Panics if the record is currently mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    /// Panics if the record is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Identity comparison: `true` when both handles point at the same record.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }

    /// Number of live holders of the record.
    pub fn holders(this: &Self) -> usize {
        Rc::strong_count(&this.0)
    }

    pub fn as_ptr(this: &Self) -> *const T {
        this.0.as_ptr()
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Shared(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(value) => f.debug_tuple("Shared").field(&*value).finish(),
            Err(_) => f.write_str("Shared(<borrowed>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Shared;

    #[test]
    fn clones_alias_the_same_record() {
        let a = Shared::new(1940);
        let b = a.clone();
        assert!(Shared::ptr_eq(&a, &b));
        assert_eq!(Shared::holders(&a), 2);

        *b.borrow_mut() = 1941;
        assert_eq!(*a.borrow(), 1941);

        drop(b);
        assert_eq!(Shared::holders(&a), 1);
    }

    #[test]
    fn equal_values_are_not_the_same_record() {
        let a = Shared::new("Al Pacino".to_string());
        let b = Shared::new("Al Pacino".to_string());
        assert!(!Shared::ptr_eq(&a, &b));
    }
}
