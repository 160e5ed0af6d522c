//! Reactive property storage.
//!
//! A [`Property`] holds a value behind a lock and reports whether a write
//! actually changed it. The owner pairs it with a [`crate::Signal`] and emits
//! only when [`Property::set`] returns `true`:
//!
//! ```
//! use curvelist_core::{Property, Signal};
//!
//! struct Toggle {
//!     checked: Property<bool>,
//!     toggled: Signal<bool>,
//! }
//!
//! impl Toggle {
//!     fn set_checked(&self, checked: bool) {
//!         if self.checked.set(checked) {
//!             self.toggled.emit(checked);
//!         }
//!     }
//! }
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A value with change detection.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Wraps an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// A clone of the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Reads the value in place.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Overwrites the value without comparing.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Stores `value` and returns true if it differs from the old one.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }

    /// Like [`set`](Self::set), returning the previous value on change.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut current = self.value.write();
        if *current != value {
            Some(std::mem::replace(&mut *current, value))
        } else {
            None
        }
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Property").field(&*self.value.read()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_reports_change() {
        let prop = Property::new(String::from("abc"));
        assert!(!prop.set("abc".to_string()));
        assert!(prop.set("abd".to_string()));
        assert_eq!(prop.get(), "abd");
    }

    #[test]
    fn test_replace_returns_previous() {
        let prop = Property::new(1);
        assert_eq!(prop.replace(1), None);
        assert_eq!(prop.replace(5), Some(1));
        assert_eq!(prop.with(|v| *v * 2), 10);
    }

    #[test]
    fn test_set_silent() {
        let prop = Property::<bool>::default();
        prop.set_silent(true);
        assert!(prop.get());
    }
}
