//! Startup array registry for leak checking builds
//!
//! Compiled only with the `no-leaks` feature. Every array created during
//! startup is registered here so it can be torn down explicitly at exit.
//! The registry holds weak references: the namespace still owns the arrays.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::runtime::array::{Array, ArrayRef};

#[derive(Debug, Default)]
pub struct ArrayRegistry {
    arrays: Vec<Weak<RefCell<Array>>>,
}

impl ArrayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track an array. Registering the same array twice is allowed; it is
    /// simply cleared twice.
    pub fn register(&mut self, array: &ArrayRef) {
        self.arrays.push(Rc::downgrade(array));
    }

    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }

    /// Clear every array that is still alive and forget all entries.
    /// Newest registrations are released first.
    pub fn release_all(&mut self) {
        debug!(count = self.arrays.len(), "releasing startup arrays");
        for weak in self.arrays.drain(..).rev() {
            if let Some(array) = weak.upgrade() {
                array.borrow_mut().clear();
            }
        }
    }
}
