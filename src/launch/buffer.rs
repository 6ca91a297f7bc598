//! Host-side buffers shared between the host and kernel lanes.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

/// A cloneable handle to a host-visible buffer.
///
/// Kernels read element ranges under a shared lock (any number of lanes may
/// fold their ranges concurrently) and write single elements under a brief
/// exclusive lock. An out-of-range access panics the lane, which faults the
/// launch — there is no mid-kernel recovery path.
///
/// A read guard may be held across a collective call (other lanes are also
/// readers there), but must be dropped before any lane writes.
pub struct HostBuffer<T> {
    inner: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for HostBuffer<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> HostBuffer<T> {
    /// Wrap host data for kernel access.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(data)),
        }
    }

    /// A buffer of `len` default-initialized elements.
    pub fn zeroed(len: usize) -> Self
    where
        T: Default + Clone,
    {
        Self::from_vec(vec![T::default(); len])
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shared read access to the underlying elements.
    pub fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.inner.read()
    }

    /// Write one element.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn write_at(&self, index: usize, value: T) {
        self.inner.write()[index] = value;
    }

    /// Copy the buffer contents back to the host.
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.read().clone()
    }
}
