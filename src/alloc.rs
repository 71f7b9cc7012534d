//! Allocator abstraction used by the array buffers.
//!
//! With the `allocator-api2` feature the trait, error and `Global` allocator
//! are taken from that crate, so any third-party allocator implementing it
//! can back a [`TypedArray`](crate::TypedArray).

use core::alloc::Layout;
#[cfg(not(feature = "allocator-api2"))]
use core::fmt;
#[cfg(not(feature = "allocator-api2"))]
use core::ptr;
use core::ptr::NonNull;
#[cfg(feature = "zeroize")]
use core::slice;

#[cfg(all(feature = "alloc", not(feature = "allocator-api2")))]
use alloc_crate::alloc::{alloc as raw_alloc, dealloc as raw_dealloc};

#[cfg(all(feature = "alloc", feature = "allocator-api2"))]
pub use allocator_api2::alloc::Global;
#[cfg(feature = "allocator-api2")]
pub use allocator_api2::alloc::{AllocError, Allocator};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

#[cfg(all(not(test), feature = "alloc"))]
pub use alloc_crate::alloc::handle_alloc_error;

/// Report a fatal allocation failure for `layout`.
///
/// Without the `alloc` crate there is no global handler to defer to, and
/// under test a panic is raised so the failure can be observed.
#[cfg(any(test, not(feature = "alloc")))]
pub fn handle_alloc_error(layout: Layout) -> ! {
    panic!("memory allocation of {} bytes failed", layout.size());
}

/// Error returned by an [`Allocator`] which could not satisfy a request.
#[cfg(not(feature = "allocator-api2"))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AllocError;

#[cfg(not(feature = "allocator-api2"))]
impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("memory allocation failed")
    }
}

#[cfg(all(feature = "std", not(feature = "allocator-api2")))]
impl std::error::Error for AllocError {}

/// A source of memory blocks described by a [`Layout`].
///
/// Zero-sized requests must succeed, returning a well-aligned dangling
/// pointer when the backing allocator cannot represent them.
///
/// # Safety
/// A returned block must stay valid until it is passed back to
/// `deallocate`, `grow` or `shrink` on this instance or a clone of it.
/// Moving or cloning the allocator must not invalidate outstanding blocks.
#[cfg(not(feature = "allocator-api2"))]
pub unsafe trait Allocator {
    /// Obtain a block fitting `layout`.
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError>;

    /// Return a block to the allocator.
    ///
    /// # Safety
    /// `ptr` must be a live block from this allocator, obtained for `layout`.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);

    /// Move a block into a larger one, preserving its bytes.
    ///
    /// # Safety
    /// `ptr` must be a live block from this allocator, obtained for `old_layout`,
    /// and `new_layout` must not be smaller.
    unsafe fn grow(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        debug_assert!(new_layout.size() >= old_layout.size());
        relocate(self, ptr, old_layout, new_layout, old_layout.size())
    }

    /// Move a block into a smaller one, preserving its leading bytes.
    ///
    /// # Safety
    /// `ptr` must be a live block from this allocator, obtained for `old_layout`,
    /// and `new_layout` must not be larger.
    unsafe fn shrink(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        debug_assert!(new_layout.size() <= old_layout.size());
        relocate(self, ptr, old_layout, new_layout, new_layout.size())
    }
}

/// Allocate a block for `new_layout`, copy `keep` bytes across and release
/// the old block. The old block is untouched if allocation fails.
#[cfg(not(feature = "allocator-api2"))]
unsafe fn relocate<A: Allocator + ?Sized>(
    alloc: &A,
    ptr: NonNull<u8>,
    old_layout: Layout,
    new_layout: Layout,
    keep: usize,
) -> Result<NonNull<[u8]>, AllocError> {
    let block = alloc.allocate(new_layout)?;
    let keep = keep.min(block.len());
    if keep > 0 {
        ptr::copy_nonoverlapping(ptr.as_ptr(), block.as_ptr().cast::<u8>(), keep);
    }
    alloc.deallocate(ptr, old_layout);
    Ok(block)
}

#[cfg(not(feature = "allocator-api2"))]
unsafe impl<A: Allocator + ?Sized> Allocator for &A {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        A::allocate(self, layout)
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        A::deallocate(self, ptr, layout)
    }

    #[inline]
    unsafe fn grow(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        A::grow(self, ptr, old_layout, new_layout)
    }

    #[inline]
    unsafe fn shrink(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        A::shrink(self, ptr, old_layout, new_layout)
    }
}

/// Allocators with a constant instance, allowing `const` array constructors.
///
/// `const_default::ConstDefault` is not implemented for the `Global`
/// allocator of `allocator-api2`, hence this separate trait.
pub trait AllocatorDefault: Allocator + Clone + Default {
    /// The constant instance.
    const DEFAULT: Self;
}

/// The process-wide allocator.
///
/// With the `alloc` feature, requests are forwarded to the registered
/// `#[global_allocator]`. Without it, `Global` remains the default allocator
/// parameter of the array types but refuses every request, so fallible
/// operations report [`StorageError::AllocError`](crate::StorageError).
#[cfg(any(not(feature = "alloc"), not(feature = "allocator-api2")))]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "alloc", derive(Default, Copy))]
pub struct Global;

#[cfg(all(feature = "alloc", not(feature = "allocator-api2")))]
unsafe impl Allocator for Global {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        if layout.size() == 0 {
            // alignments are non-zero powers of two
            let dangling = unsafe { NonNull::new_unchecked(layout.align() as *mut u8) };
            return Ok(NonNull::slice_from_raw_parts(dangling, 0));
        }
        match NonNull::new(unsafe { raw_alloc(layout) }) {
            Some(ptr) => Ok(NonNull::slice_from_raw_parts(ptr, layout.size())),
            None => Err(AllocError),
        }
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() != 0 {
            raw_dealloc(ptr.as_ptr(), layout);
        }
    }
}

#[cfg(not(feature = "alloc"))]
unsafe impl Allocator for Global {
    #[inline]
    fn allocate(&self, _layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        Err(AllocError)
    }

    // never reached: no block is ever handed out
    unsafe fn deallocate(&self, _ptr: NonNull<u8>, _layout: Layout) {}
}

#[cfg(feature = "alloc")]
impl AllocatorDefault for Global {
    const DEFAULT: Self = Global;
}

/// Wraps an allocator `A`, overwriting every block with zeros before it is
/// returned to `A`.
///
/// Growing and shrinking always move to a fresh block, so stale copies of
/// the contents are wiped as well.
#[cfg(feature = "zeroize")]
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroizingAlloc<A>(pub A);

#[cfg(feature = "zeroize")]
unsafe impl<A: Allocator> Allocator for ZeroizingAlloc<A> {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        self.0.allocate(layout)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() != 0 {
            slice::from_raw_parts_mut(ptr.as_ptr(), layout.size()).zeroize();
        }
        self.0.deallocate(ptr, layout)
    }
}

#[cfg(feature = "zeroize")]
impl<A: AllocatorDefault> AllocatorDefault for ZeroizingAlloc<A> {
    const DEFAULT: Self = ZeroizingAlloc(A::DEFAULT);
}

#[cfg(test)]
mod tests {
    use core::alloc::Layout;

    use super::{Allocator, Global};

    #[cfg(feature = "alloc")]
    #[test]
    fn global_grow_and_shrink_preserve_bytes() {
        let small = Layout::array::<u8>(4).unwrap();
        let large = Layout::array::<u8>(16).unwrap();
        unsafe {
            let block = Global.allocate(small).unwrap();
            let ptr = block.cast::<u8>();
            ptr.as_ptr().copy_from_nonoverlapping([1u8, 2, 3, 4].as_ptr(), 4);
            let grown = Global.grow(ptr, small, large).unwrap().cast::<u8>();
            let shrunk = Global.shrink(grown, large, small).unwrap().cast::<u8>();
            assert_eq!(core::slice::from_raw_parts(shrunk.as_ptr(), 4), &[1, 2, 3, 4]);
            Global.deallocate(shrunk, small);
        }
    }

    #[cfg(not(feature = "alloc"))]
    #[test]
    fn global_without_alloc_refuses() {
        use crate::{StorageError, TypedArray};

        assert!(Global.allocate(Layout::new::<u32>()).is_err());
        let mut array = TypedArray::<u32>::new_in(Global);
        let err = array.try_push_back(1).unwrap_err();
        assert!(matches!(err.error(), StorageError::AllocError(_)));
        assert_eq!(err.into_value(), 1);
    }
}
