use core::mem::{self, MaybeUninit};
use core::ptr;

/// Fills a gap of uninitialized slots opened within an array buffer.
///
/// If filling is abandoned (a `clone` panics), the written elements are
/// dropped and the `tail` elements displaced beyond the gap are moved back
/// to the gap start, restoring the original sequence.
pub(crate) struct Inserter<'a, T> {
    buf: &'a mut [MaybeUninit<T>],
    start: usize,
    end: usize,
    count: usize,
    tail: usize,
}

impl<'a, T> Inserter<'a, T> {
    /// # Safety
    /// The slots `[start, start + count)` of `buf` must be free to overwrite,
    /// followed by `tail` initialized elements.
    #[inline]
    pub unsafe fn for_gap(
        buf: &'a mut [MaybeUninit<T>],
        start: usize,
        count: usize,
        tail: usize,
    ) -> Self {
        debug_assert!(start + count + tail <= buf.len());
        Self {
            buf,
            start,
            end: start,
            count,
            tail,
        }
    }

    #[inline]
    pub fn push(&mut self, val: T) {
        assert!(self.end < self.start + self.count);
        self.buf[self.end].write(val);
        self.end += 1;
    }

    #[inline]
    pub fn push_clone(&mut self, val: &T)
    where
        T: Clone,
    {
        self.push(val.clone());
    }

    #[inline]
    pub fn extend_from_slice(&mut self, data: &[T])
    where
        T: Clone,
    {
        for item in data {
            self.push_clone(item);
        }
    }

    /// Finish filling, returning the number of elements written.
    #[inline]
    pub fn complete(self) -> usize {
        assert_eq!(self.end - self.start, self.count, "Gap not filled");
        let added = self.count;
        mem::forget(self);
        added
    }
}

impl<T> Drop for Inserter<'_, T> {
    fn drop(&mut self) {
        let data = self.buf.as_mut_ptr().cast::<T>();
        unsafe {
            if self.end != self.start {
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                    data.add(self.start),
                    self.end - self.start,
                ));
            }
            if self.tail > 0 {
                ptr::copy(
                    data.add(self.start + self.count),
                    data.add(self.start),
                    self.tail,
                );
            }
        }
    }
}
