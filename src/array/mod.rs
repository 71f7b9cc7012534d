//! A growable, contiguous array of uniformly sized elements.

use core::borrow::{Borrow, BorrowMut};
use core::cmp::Ordering;
use core::fmt;
use core::mem::{size_of, MaybeUninit};
use core::ops::{Deref, DerefMut};
use core::ptr;
use core::slice;

use const_default::ConstDefault;

use crate::alloc::{Allocator, AllocatorDefault, Global};
use crate::capacity::next_capacity;
use crate::error::{empty_panic, index_panic, StorageError, UpdateError};
use crate::storage::ArrayBuffer;

use self::insert::Inserter;

pub use self::into_iter::IntoIter;

pub(crate) mod insert;
mod into_iter;

#[cfg(feature = "zeroize")]
/// A `TypedArray` which zeroizes every buffer it releases.
pub type ZeroizingArray<T> = TypedArray<T, crate::alloc::ZeroizingAlloc<Global>>;

/// A growable array of `T`, tracking a live length within an allocated capacity.
///
/// Elements are edited in place: insertion and removal at an index shift the
/// following elements with a single block move. References returned by
/// accessors and insertions borrow the array, so they cannot outlive the next
/// mutation.
///
/// Growth doubles the capacity (see [`next_capacity`]), except for
/// [`TypedArray::reserve`] and [`TypedArray::shrink_to_fit`] which request
/// an exact capacity.
pub struct TypedArray<T, A: Allocator = Global> {
    buffer: ArrayBuffer<T, A>,
}

impl<T, A: AllocatorDefault> TypedArray<T, A> {
    /// Constructs a new, empty `TypedArray<T, A>`.
    ///
    /// The array will not allocate until elements are pushed onto it.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "alloc")] {
    /// use flex_array::TypedArray;
    ///
    /// let array = TypedArray::<u32>::new();
    /// assert_eq!(array.capacity(), 0);
    /// # }
    /// ```
    pub const fn new() -> Self {
        Self {
            buffer: ArrayBuffer::dangling(A::DEFAULT),
        }
    }

    /// Constructs an empty array with exactly `capacity` allocated slots.
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Try to construct an empty array with exactly `capacity` allocated slots.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, StorageError> {
        Self::try_with_capacity_in(capacity, A::DEFAULT)
    }

    /// Constructs an array holding clones of the elements of `data`,
    /// with a capacity equal to its length.
    pub fn from_slice(data: &[T]) -> Self
    where
        T: Clone,
    {
        match Self::try_from_slice(data) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Try to construct an array holding clones of the elements of `data`.
    pub fn try_from_slice(data: &[T]) -> Result<Self, StorageError>
    where
        T: Clone,
    {
        let mut array = Self::try_with_capacity(data.len())?;
        array.try_extend_from_slice(data)?;
        Ok(array)
    }
}

impl<T, A: Allocator> TypedArray<T, A> {
    /// Constructs a new, empty array using the allocator `alloc`.
    pub const fn new_in(alloc: A) -> Self {
        Self {
            buffer: ArrayBuffer::dangling(alloc),
        }
    }

    /// Constructs an empty array with exactly `capacity` slots allocated
    /// from `alloc`.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Self {
        match Self::try_with_capacity_in(capacity, alloc) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Try to construct an empty array with exactly `capacity` slots allocated
    /// from `alloc`.
    pub fn try_with_capacity_in(capacity: usize, alloc: A) -> Result<Self, StorageError> {
        Ok(Self {
            buffer: ArrayBuffer::try_alloc_in(alloc, capacity)?,
        })
    }

    /// Access the allocator instance.
    #[inline]
    pub fn allocator(&self) -> &A {
        self.buffer.allocator()
    }

    /// The width in bytes of a single element slot.
    #[inline]
    pub const fn elem_size(&self) -> usize {
        size_of::<T>()
    }

    /// Get the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.length()
    }

    /// Get the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Check whether the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.length() == 0
    }

    /// Access the start of the buffer.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buffer.data_ptr()
    }

    /// Mutably access the start of the buffer.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buffer.data_ptr_mut()
    }

    /// Access the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.buffer.as_slice()
    }

    /// Mutably access the live elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buffer.as_mut_slice()
    }

    /// Access the allocated slots following the live elements.
    #[inline]
    pub fn spare_capacity_mut(&mut self) -> &mut [MaybeUninit<T>] {
        let length = self.buffer.length();
        &mut self.buffer.as_uninit_slice()[length..]
    }

    /// Force the length of the array.
    ///
    /// # Safety
    /// `length` must not exceed the capacity and the slots `[0, length)`
    /// must be initialized.
    #[inline]
    pub unsafe fn set_len(&mut self, length: usize) {
        self.buffer.set_length(length)
    }

    /// Access the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is not less than the length.
    #[inline]
    pub fn at(&self, index: usize) -> &T {
        match self.as_slice().get(index) {
            Some(item) => item,
            None => index_panic(),
        }
    }

    /// Mutably access the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is not less than the length.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        match self.as_mut_slice().get_mut(index) {
            Some(item) => item,
            None => index_panic(),
        }
    }

    /// Ensure the capacity is at least `min_capacity`, reallocating to exactly
    /// that many slots if necessary. The capacity is never reduced.
    #[inline]
    pub fn reserve(&mut self, min_capacity: usize) {
        match self.try_reserve(min_capacity) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Try to ensure the capacity is at least `min_capacity`.
    pub fn try_reserve(&mut self, min_capacity: usize) -> Result<(), StorageError> {
        if min_capacity > self.buffer.capacity() {
            self.buffer.try_resize(min_capacity)?;
        }
        Ok(())
    }

    /// Grow the buffer according to the doubling policy when `additional`
    /// elements do not fit in the spare capacity.
    fn try_grow(&mut self, additional: usize) -> Result<(), StorageError> {
        let buf_cap = self.buffer.capacity();
        let Some(buf_needed) = self.buffer.length().checked_add(additional) else {
            return Err(StorageError::CapacityLimit);
        };
        if buf_cap >= buf_needed {
            return Ok(());
        }
        self.buffer.try_resize(next_capacity(buf_cap, buf_needed))
    }

    /// Reallocate the buffer to hold exactly the live elements, releasing it
    /// entirely when the array is empty.
    #[inline]
    pub fn shrink_to_fit(&mut self) -> &mut [T] {
        match self.try_shrink_to_fit() {
            Ok(res) => res,
            Err(err) => err.panic(),
        }
    }

    /// Try to reallocate the buffer to hold exactly the live elements.
    pub fn try_shrink_to_fit(&mut self) -> Result<&mut [T], StorageError> {
        let length = self.buffer.length();
        if self.buffer.capacity() != length {
            self.buffer.try_resize(length)?;
        }
        Ok(self.buffer.as_mut_slice())
    }

    /// Insert `value` at `index`, shifting the following elements toward the
    /// tail. Returns a reference to the inserted element.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length.
    pub fn insert_at(&mut self, index: usize, value: T) -> &mut T {
        match self.try_insert_at(index, value) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Try to insert `value` at `index`, returning it on allocation failure.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length.
    pub fn try_insert_at(&mut self, index: usize, value: T) -> Result<&mut T, UpdateError<T>> {
        let prev_len = self.buffer.length();
        if index > prev_len {
            index_panic();
        }
        if let Err(error) = self.try_grow(1) {
            return Err(UpdateError::new(error, value));
        }
        let tail_count = prev_len - index;
        let head = unsafe { self.buffer.data_ptr_mut().add(index) };
        unsafe {
            if tail_count > 0 {
                ptr::copy(head, head.add(1), tail_count);
            }
            head.write(value);
            self.buffer.set_length(prev_len + 1);
            Ok(&mut *head)
        }
    }

    /// Insert clones of `values` at `index`, shifting the following elements
    /// toward the tail by `values.len()` slots in one move. Returns the
    /// inserted range.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length.
    pub fn insert_range(&mut self, index: usize, values: &[T]) -> &mut [T]
    where
        T: Clone,
    {
        match self.try_insert_range(index, values) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Try to insert clones of `values` at `index`.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length.
    pub fn try_insert_range(&mut self, index: usize, values: &[T]) -> Result<&mut [T], StorageError>
    where
        T: Clone,
    {
        let prev_len = self.buffer.length();
        if index > prev_len {
            index_panic();
        }
        let ins_count = values.len();
        self.try_grow(ins_count)?;
        let tail_count = prev_len - index;
        if tail_count > 0 && ins_count > 0 {
            unsafe {
                let head = self.buffer.data_ptr_mut().add(index);
                ptr::copy(head, head.add(ins_count), tail_count);
            }
        }
        let mut insert = unsafe {
            Inserter::for_gap(self.buffer.as_uninit_slice(), index, ins_count, tail_count)
        };
        insert.extend_from_slice(values);
        insert.complete();
        unsafe { self.buffer.set_length(prev_len + ins_count) };
        Ok(&mut self.buffer.as_mut_slice()[index..index + ins_count])
    }

    /// Remove and return the element at `index`, shifting the following
    /// elements toward the head.
    ///
    /// # Panics
    /// Panics if `index` is not less than the length.
    pub fn remove_at(&mut self, index: usize) -> T {
        let len = self.buffer.length();
        if index >= len {
            index_panic();
        }
        let copy_count = len - index - 1;
        unsafe {
            let head = self.buffer.data_ptr_mut().add(index);
            let result = ptr::read(head);
            if copy_count > 0 {
                ptr::copy(head.add(1), head, copy_count);
            }
            self.buffer.set_length(len - 1);
            result
        }
    }

    /// Append `value`, returning a reference to it.
    #[inline]
    pub fn push_back(&mut self, value: T) -> &mut T {
        let length = self.buffer.length();
        self.insert_at(length, value)
    }

    /// Try to append `value`, returning it on allocation failure.
    #[inline]
    pub fn try_push_back(&mut self, value: T) -> Result<&mut T, UpdateError<T>> {
        let length = self.buffer.length();
        self.try_insert_at(length, value)
    }

    /// Prepend `value`, shifting every element. Returns a reference to it.
    #[inline]
    pub fn push_front(&mut self, value: T) -> &mut T {
        self.insert_at(0, value)
    }

    /// Try to prepend `value`, returning it on allocation failure.
    #[inline]
    pub fn try_push_front(&mut self, value: T) -> Result<&mut T, UpdateError<T>> {
        self.try_insert_at(0, value)
    }

    /// Remove and return the last element.
    ///
    /// # Panics
    /// Panics if the array is empty.
    pub fn pop_back(&mut self) -> T {
        let length = self.buffer.length();
        if length == 0 {
            empty_panic();
        }
        unsafe {
            self.buffer.set_length(length - 1);
            self.buffer.uninit_index(length - 1).assume_init_read()
        }
    }

    /// Remove and return the first element, shifting every other element.
    ///
    /// # Panics
    /// Panics if the array is empty.
    pub fn pop_front(&mut self) -> T {
        if self.buffer.length() == 0 {
            empty_panic();
        }
        self.remove_at(0)
    }

    /// Append clones of the elements of `items`.
    pub fn extend_from_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        match self.try_extend_from_slice(items) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Try to append clones of the elements of `items`.
    pub fn try_extend_from_slice(&mut self, items: &[T]) -> Result<(), StorageError>
    where
        T: Clone,
    {
        let length = self.buffer.length();
        self.try_insert_range(length, items)?;
        Ok(())
    }

    /// Drop the elements beyond `length`, keeping the allocation.
    pub fn truncate(&mut self, length: usize) {
        let old_len = self.buffer.length();
        let new_len = length.min(old_len);
        let remove = old_len - new_len;
        if remove > 0 {
            unsafe {
                self.buffer.set_length(new_len);
                let to_drop: *mut [T] =
                    ptr::slice_from_raw_parts_mut(self.buffer.data_ptr_mut().add(new_len), remove);
                ptr::drop_in_place(to_drop);
            }
        }
    }

    /// Drop every element and release the storage.
    pub fn clear(&mut self) {
        self.truncate(0);
        self.buffer.release();
    }

    /// Pass every live element to `finalize` in ascending index order, then
    /// release the storage. Slots beyond the length are never visited.
    pub fn clear_with<F>(&mut self, mut finalize: F)
    where
        F: FnMut(T),
    {
        let length = self.buffer.length();
        if length > 0 {
            // if `finalize` panics the remaining elements are leaked
            unsafe { self.buffer.set_length(0) };
            let data = self.buffer.data_ptr();
            for index in 0..length {
                finalize(unsafe { ptr::read(data.add(index)) });
            }
        }
        self.buffer.release();
    }

    /// Consume the array, passing every live element to `finalize` in
    /// ascending index order before the storage is released.
    #[inline]
    pub fn free_with<F>(self, finalize: F)
    where
        F: FnMut(T),
    {
        self.into_iter().for_each(finalize);
    }

    /// Find the first position whose element is not less than `key`,
    /// or the length if there is none. The array must be sorted.
    #[inline]
    pub fn lower_bound(&self, key: &T) -> usize
    where
        T: Ord,
    {
        self.lower_bound_by(key, T::cmp)
    }

    /// Find the first position whose element compares as not less than `key`
    /// according to `cmp`, or the length if there is none. The array must be
    /// sorted consistently with `cmp`.
    pub fn lower_bound_by<K, F>(&self, key: &K, mut cmp: F) -> usize
    where
        K: ?Sized,
        F: FnMut(&T, &K) -> Ordering,
    {
        self.as_slice()
            .partition_point(|item| cmp(item, key) == Ordering::Less)
    }

    /// Find the first position whose element is greater than `key`,
    /// or the length if there is none. The array must be sorted.
    #[inline]
    pub fn upper_bound(&self, key: &T) -> usize
    where
        T: Ord,
    {
        self.upper_bound_by(key, T::cmp)
    }

    /// Find the first position whose element compares as greater than `key`
    /// according to `cmp`, or the length if there is none. The array must be
    /// sorted consistently with `cmp`.
    pub fn upper_bound_by<K, F>(&self, key: &K, mut cmp: F) -> usize
    where
        K: ?Sized,
        F: FnMut(&T, &K) -> Ordering,
    {
        self.as_slice()
            .partition_point(|item| cmp(item, key) != Ordering::Greater)
    }

    /// Sort the elements in ascending order. The sort is not stable.
    #[inline]
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.as_mut_slice().sort_unstable();
    }

    /// Sort the elements in ascending order according to `cmp`.
    /// The sort is not stable.
    #[inline]
    pub fn sort_by<F>(&mut self, cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.as_mut_slice().sort_unstable_by(cmp);
    }
}

impl<T, A: Allocator> AsRef<[T]> for TypedArray<T, A> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator> AsMut<[T]> for TypedArray<T, A> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, A: Allocator> Borrow<[T]> for TypedArray<T, A> {
    #[inline]
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator> BorrowMut<[T]> for TypedArray<T, A> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// The clone has the same capacity as the source and shares no storage with it.
impl<T: Clone, A: Allocator + Clone> Clone for TypedArray<T, A> {
    fn clone(&self) -> Self {
        let mut inst =
            match Self::try_with_capacity_in(self.buffer.capacity(), self.allocator().clone()) {
                Ok(inst) => inst,
                Err(err) => err.panic(),
            };
        let source = self.as_slice();
        let mut insert = unsafe { Inserter::for_gap(inst.buffer.as_uninit_slice(), 0, source.len(), 0) };
        insert.extend_from_slice(source);
        let added = insert.complete();
        unsafe { inst.buffer.set_length(added) };
        inst
    }

    fn clone_from(&mut self, source: &Self) {
        self.truncate(0);
        self.reserve(source.capacity());
        self.extend_from_slice(source);
    }
}

impl<T, A: AllocatorDefault> ConstDefault for TypedArray<T, A> {
    const DEFAULT: Self = Self::new();
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for TypedArray<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt(f)
    }
}

impl<T, A: AllocatorDefault> Default for TypedArray<T, A> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A: Allocator> Deref for TypedArray<T, A> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, A: Allocator> DerefMut for TypedArray<T, A> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, A: Allocator> Drop for TypedArray<T, A> {
    fn drop(&mut self) {
        self.truncate(0);
    }
}

impl<T, A: Allocator> Extend<T> for TypedArray<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (min_len, _) = iter.size_hint();
        if let Err(error) = self.try_grow(min_len) {
            error.panic();
        }
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Clone + 'a, A: Allocator> Extend<&'a T> for TypedArray<T, A> {
    #[inline]
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned())
    }
}

impl<T, A: AllocatorDefault> FromIterator<T> for TypedArray<T, A> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T: Clone, A: AllocatorDefault> From<&[T]> for TypedArray<T, A> {
    #[inline]
    fn from(data: &[T]) -> Self {
        Self::from_slice(data)
    }
}

impl<T, A: AllocatorDefault, const N: usize> From<[T; N]> for TypedArray<T, A> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        let mut array = Self::with_capacity(N);
        array.extend(data);
        array
    }
}

#[cfg(feature = "alloc")]
impl<T> From<alloc_crate::vec::Vec<T>> for TypedArray<T, Global> {
    fn from(vec: alloc_crate::vec::Vec<T>) -> Self {
        let mut vec = core::mem::ManuallyDrop::new(vec);
        let header = crate::storage::ArrayHeader {
            capacity: vec.capacity(),
            length: vec.len(),
        };
        let data = unsafe { ptr::NonNull::new_unchecked(vec.as_mut_ptr()) };
        Self {
            buffer: unsafe { ArrayBuffer::from_raw_parts(header, data, Global) },
        }
    }
}

#[cfg(feature = "alloc")]
impl<T> From<TypedArray<T, Global>> for alloc_crate::vec::Vec<T> {
    fn from(array: TypedArray<T, Global>) -> Self {
        let (header, data, _alloc) = array.into_buffer().into_raw_parts();
        unsafe { alloc_crate::vec::Vec::from_raw_parts(data.as_ptr(), header.length, header.capacity) }
    }
}

impl<T, A: Allocator> TypedArray<T, A> {
    #[inline]
    fn into_buffer(self) -> ArrayBuffer<T, A> {
        let me = core::mem::ManuallyDrop::new(self);
        unsafe { ptr::read(&me.buffer) }
    }
}

impl<T, A: Allocator> IntoIterator for TypedArray<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.into_buffer())
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a TypedArray<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut TypedArray<T, A> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T1, A1, T2, A2> PartialEq<TypedArray<T2, A2>> for TypedArray<T1, A1>
where
    A1: Allocator,
    A2: Allocator,
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &TypedArray<T2, A2>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<T: Eq, A: Allocator> Eq for TypedArray<T, A> {}

impl<T1, A1, T2> PartialEq<[T2]> for TypedArray<T1, A1>
where
    T1: PartialEq<T2>,
    A1: Allocator,
{
    #[inline]
    fn eq(&self, other: &[T2]) -> bool {
        self.as_slice().eq(other)
    }
}

impl<T1, A1, T2> PartialEq<&[T2]> for TypedArray<T1, A1>
where
    T1: PartialEq<T2>,
    A1: Allocator,
{
    #[inline]
    fn eq(&self, other: &&[T2]) -> bool {
        self.as_slice().eq(*other)
    }
}

impl<T1, A1, T2, const N: usize> PartialEq<[T2; N]> for TypedArray<T1, A1>
where
    T1: PartialEq<T2>,
    A1: Allocator,
{
    #[inline]
    fn eq(&self, other: &[T2; N]) -> bool {
        self.as_slice().eq(&other[..])
    }
}

impl<T1, A1, T2, const N: usize> PartialEq<&[T2; N]> for TypedArray<T1, A1>
where
    T1: PartialEq<T2>,
    A1: Allocator,
{
    #[inline]
    fn eq(&self, other: &&[T2; N]) -> bool {
        self.as_slice().eq(&other[..])
    }
}

// The array exclusively owns its buffer, so it may move between threads
// whenever its elements and allocator can.
unsafe impl<T: Send, A: Allocator + Send> Send for TypedArray<T, A> {}

unsafe impl<T: Sync, A: Allocator + Sync> Sync for TypedArray<T, A> {}

/// ```compile_fail,E0499
/// use flex_array::TypedArray;
///
/// let mut array = TypedArray::<u32>::new();
/// let first = array.push_back(1);
/// array.push_back(2);
/// *first = 3;
/// ```
#[cfg(doctest)]
fn _borrow_check() {}
