//! Raw buffer management shared by the array types.

use core::alloc::Layout;
use core::fmt;
use core::mem::{ManuallyDrop, MaybeUninit};
use core::ptr::{self, NonNull};
use core::slice;

use crate::alloc::Allocator;
use crate::error::StorageError;

/// The layout of an allocation holding `capacity` slots of `T`.
#[inline]
fn array_layout<T>(capacity: usize) -> Result<Layout, StorageError> {
    Ok(Layout::array::<T>(capacity)?)
}

/// The bookkeeping for an array allocation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct ArrayHeader {
    pub capacity: usize,
    pub length: usize,
}

impl ArrayHeader {
    pub const EMPTY: Self = Self {
        capacity: 0,
        length: 0,
    };
}

/// An owned, contiguous allocation of `capacity` slots of `T`, of which the
/// first `length` are initialized.
///
/// The buffer releases its allocation on drop but never drops elements:
/// the owning collection is responsible for the live range.
pub(crate) struct ArrayBuffer<T, A: Allocator> {
    header: ArrayHeader,
    data: NonNull<T>,
    alloc: A,
}

impl<T, A: Allocator> ArrayBuffer<T, A> {
    #[inline]
    pub const fn dangling(alloc: A) -> Self {
        Self {
            header: ArrayHeader::EMPTY,
            data: NonNull::dangling(),
            alloc,
        }
    }

    pub fn try_alloc_in(alloc: A, capacity: usize) -> Result<Self, StorageError> {
        let mut buf = Self::dangling(alloc);
        buf.try_resize(capacity)?;
        Ok(buf)
    }

    /// # Safety
    /// `data` must be an allocation produced by `alloc` for `header.capacity`
    /// slots of `T`, with `header.length` initialized elements.
    #[inline]
    pub unsafe fn from_raw_parts(header: ArrayHeader, data: NonNull<T>, alloc: A) -> Self {
        Self {
            header,
            data,
            alloc,
        }
    }

    #[inline]
    pub fn into_raw_parts(self) -> (ArrayHeader, NonNull<T>, A) {
        let parts = ManuallyDrop::new(self);
        let alloc = unsafe { ptr::read(&parts.alloc) };
        (parts.header, parts.data, alloc)
    }

    #[inline]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.header.capacity
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.header.length
    }

    /// # Safety
    /// The slots `[0, len)` must be initialized and `len` must not exceed the
    /// buffer capacity.
    #[inline]
    pub unsafe fn set_length(&mut self, len: usize) {
        debug_assert!(len <= self.header.capacity);
        self.header.length = len;
    }

    #[inline]
    pub fn data_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    #[inline]
    pub fn data_ptr_mut(&mut self) -> *mut T {
        self.data.as_ptr()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.data_ptr(), self.header.length) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.data_ptr_mut(), self.header.length) }
    }

    /// Access every allocated slot, initialized or not.
    #[inline]
    pub fn as_uninit_slice(&mut self) -> &mut [MaybeUninit<T>] {
        unsafe { slice::from_raw_parts_mut(self.data_ptr_mut().cast(), self.header.capacity) }
    }

    /// # Safety
    /// The index must be within the bounds of the buffer's capacity, otherwise a
    /// memory access error may occur.
    #[inline]
    pub unsafe fn uninit_index(&mut self, index: usize) -> &mut MaybeUninit<T> {
        &mut *self.data_ptr_mut().add(index).cast()
    }

    /// Reallocate the buffer to exactly `capacity` slots, preserving the
    /// contents of the live range. A capacity of zero releases the allocation.
    pub fn try_resize(&mut self, capacity: usize) -> Result<(), StorageError> {
        debug_assert!(capacity >= self.header.length);
        if capacity == self.header.capacity {
            return Ok(());
        }
        if capacity == 0 {
            self.release();
            return Ok(());
        }
        let new_layout = array_layout::<T>(capacity)?;
        let result = if self.header.capacity == 0 {
            self.alloc.allocate(new_layout)
        } else {
            let old_layout = array_layout::<T>(self.header.capacity)?;
            let ptr = self.data.cast::<u8>();
            if new_layout.size() >= old_layout.size() {
                unsafe { self.alloc.grow(ptr, old_layout, new_layout) }
            } else {
                unsafe { self.alloc.shrink(ptr, old_layout, new_layout) }
            }
        };
        let ptr = result.map_err(|_| StorageError::AllocError(new_layout))?;
        self.data = ptr.cast();
        self.header.capacity = capacity;
        Ok(())
    }

    /// Release the allocation. The live range must already be empty.
    pub fn release(&mut self) {
        debug_assert_eq!(self.header.length, 0);
        if self.header.capacity > 0 {
            if let Ok(layout) = array_layout::<T>(self.header.capacity) {
                unsafe { self.alloc.deallocate(self.data.cast(), layout) };
            }
            self.data = NonNull::dangling();
            self.header = ArrayHeader::EMPTY;
        }
    }
}

impl<T, A: Allocator> Drop for ArrayBuffer<T, A> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T, A: Allocator + fmt::Debug> fmt::Debug for ArrayBuffer<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayBuffer")
            .field("header", &self.header)
            .field("alloc", &self.alloc)
            .finish_non_exhaustive()
    }
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::ArrayBuffer;
    use crate::alloc::Global;

    #[test]
    fn buffer_dangling() {
        let buf = ArrayBuffer::<u32, _>::dangling(Global);
        assert_eq!(buf.capacity(), 0);
        assert_eq!(buf.length(), 0);
        assert!(buf.as_slice().is_empty());
    }

    #[test]
    fn buffer_resize_preserves_contents() {
        let mut buf = ArrayBuffer::<u32, _>::try_alloc_in(Global, 2).unwrap();
        buf.as_uninit_slice()[0].write(10);
        buf.as_uninit_slice()[1].write(20);
        unsafe { buf.set_length(2) };
        buf.try_resize(50).unwrap();
        assert_eq!(buf.capacity(), 50);
        assert_eq!(buf.as_slice(), &[10, 20]);
        buf.try_resize(2).unwrap();
        assert_eq!(buf.capacity(), 2);
        assert_eq!(buf.as_slice(), &[10, 20]);
        unsafe { buf.set_length(0) };
    }

    #[test]
    fn buffer_resize_to_zero_releases() {
        let mut buf = ArrayBuffer::<u32, _>::try_alloc_in(Global, 8).unwrap();
        assert_eq!(buf.capacity(), 8);
        buf.try_resize(0).unwrap();
        assert_eq!(buf.capacity(), 0);
    }

    #[test]
    fn buffer_zst() {
        let mut buf = ArrayBuffer::<(), _>::try_alloc_in(Global, 4).unwrap();
        assert_eq!(buf.capacity(), 4);
        buf.try_resize(16).unwrap();
        assert_eq!(buf.capacity(), 16);
    }
}
