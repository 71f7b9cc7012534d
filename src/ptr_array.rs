//! Arrays of owned handles with an optional destructor.
//!
//! A [`PtrArray`] stores pointer-like handles: raw or `NonNull` pointers,
//! boxes, `Option` sentinels, or plain indices. The destructor, when set,
//! receives every handle the array discards through [`PtrArray::clear`] or
//! when it is dropped. Handles returned to the caller by [`PtrArray::pop`],
//! [`PtrArray::remove_at`] or [`PtrArray::set`] transfer ownership out and
//! are never passed to the destructor.

use core::cmp::Ordering;
use core::fmt;
use core::mem::{self, ManuallyDrop};
use core::ops::Deref;
use core::ptr;
use core::slice;

use const_default::ConstDefault;

use crate::alloc::{Allocator, AllocatorDefault, Global};
use crate::array::TypedArray;
use crate::error::{StorageError, UpdateError};

/// A callback receiving each handle discarded by a [`PtrArray`].
pub type Destructor<P> = fn(P);

/// A growable array of handles `P` with an optional [`Destructor`].
///
/// Without a destructor, discarded handles are dropped normally, which
/// for raw pointers means the array does not own the pointees.
pub struct PtrArray<P, A: Allocator = Global> {
    inner: TypedArray<P, A>,
    destructor: Option<Destructor<P>>,
}

impl<P, A: AllocatorDefault> PtrArray<P, A> {
    /// Constructs a new, empty array with no destructor.
    pub const fn new() -> Self {
        Self {
            inner: TypedArray::new(),
            destructor: None,
        }
    }

    /// Constructs a new, empty array which passes discarded handles to `destructor`.
    pub const fn with_destructor(destructor: Destructor<P>) -> Self {
        Self {
            inner: TypedArray::new(),
            destructor: Some(destructor),
        }
    }
}

impl<P, A: Allocator> PtrArray<P, A> {
    /// Constructs a new, empty array using the allocator `alloc`.
    pub const fn new_in(alloc: A) -> Self {
        Self {
            inner: TypedArray::new_in(alloc),
            destructor: None,
        }
    }

    /// Constructs a new, empty array using the allocator `alloc`, which passes
    /// discarded handles to `destructor`.
    pub const fn with_destructor_in(destructor: Destructor<P>, alloc: A) -> Self {
        Self {
            inner: TypedArray::new_in(alloc),
            destructor: Some(destructor),
        }
    }

    /// Take ownership of the handles in `inner`.
    pub fn from_array(inner: TypedArray<P, A>, destructor: Option<Destructor<P>>) -> Self {
        Self { inner, destructor }
    }

    /// Release the handles as a plain array without running the destructor.
    pub fn into_array(self) -> TypedArray<P, A> {
        let me = ManuallyDrop::new(self);
        unsafe { ptr::read(&me.inner) }
    }

    /// Get the destructor applied to discarded handles.
    #[inline]
    pub fn destructor(&self) -> Option<Destructor<P>> {
        self.destructor
    }

    /// Replace the destructor, returning the previous one.
    #[inline]
    pub fn set_destructor(&mut self, destructor: Option<Destructor<P>>) -> Option<Destructor<P>> {
        mem::replace(&mut self.destructor, destructor)
    }

    /// Access the allocator instance.
    #[inline]
    pub fn allocator(&self) -> &A {
        self.inner.allocator()
    }

    /// Get the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Get the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Check whether the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Access the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[P] {
        self.inner.as_slice()
    }

    /// Mutably access the live elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [P] {
        self.inner.as_mut_slice()
    }

    /// Iterate the live handles in index order.
    ///
    /// Each call starts a fresh traversal of the current contents.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, P> {
        self.inner.as_slice().iter()
    }

    /// See [`TypedArray::reserve`].
    #[inline]
    pub fn reserve(&mut self, min_capacity: usize) {
        self.inner.reserve(min_capacity)
    }

    /// See [`TypedArray::try_reserve`].
    #[inline]
    pub fn try_reserve(&mut self, min_capacity: usize) -> Result<(), StorageError> {
        self.inner.try_reserve(min_capacity)
    }

    /// See [`TypedArray::shrink_to_fit`].
    #[inline]
    pub fn shrink_to_fit(&mut self) -> &mut [P] {
        self.inner.shrink_to_fit()
    }

    /// Access the handle at `index`.
    ///
    /// # Panics
    /// Panics if `index` is not less than the length.
    #[inline]
    pub fn at(&self, index: usize) -> &P {
        self.inner.at(index)
    }

    /// Store `value` at `index`, returning the previous handle to the caller.
    /// The destructor is not invoked.
    ///
    /// # Panics
    /// Panics if `index` is not less than the length.
    #[inline]
    pub fn set(&mut self, index: usize, value: P) -> P {
        mem::replace(self.inner.at_mut(index), value)
    }

    /// Append `value`, returning a reference to its slot.
    #[inline]
    pub fn push(&mut self, value: P) -> &mut P {
        self.inner.push_back(value)
    }

    /// Try to append `value`, returning it on allocation failure.
    #[inline]
    pub fn try_push(&mut self, value: P) -> Result<&mut P, UpdateError<P>> {
        self.inner.try_push_back(value)
    }

    /// Prepend `value`, returning a reference to its slot.
    #[inline]
    pub fn push_front(&mut self, value: P) -> &mut P {
        self.inner.push_front(value)
    }

    /// Insert `value` at `index`, returning a reference to its slot.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length.
    #[inline]
    pub fn insert_at(&mut self, index: usize, value: P) -> &mut P {
        self.inner.insert_at(index, value)
    }

    /// Insert clones of `values` at `index`, returning the inserted slots.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length.
    #[inline]
    pub fn insert_range(&mut self, index: usize, values: &[P]) -> &mut [P]
    where
        P: Clone,
    {
        self.inner.insert_range(index, values)
    }

    /// Remove and return the last handle. The destructor is not invoked.
    ///
    /// # Panics
    /// Panics if the array is empty.
    #[inline]
    pub fn pop(&mut self) -> P {
        self.inner.pop_back()
    }

    /// Remove and return the first handle. The destructor is not invoked.
    ///
    /// # Panics
    /// Panics if the array is empty.
    #[inline]
    pub fn pop_front(&mut self) -> P {
        self.inner.pop_front()
    }

    /// Remove and return the handle at `index`. The destructor is not invoked.
    ///
    /// # Panics
    /// Panics if `index` is not less than the length.
    #[inline]
    pub fn remove_at(&mut self, index: usize) -> P {
        self.inner.remove_at(index)
    }

    /// Find the first slot holding `value`.
    pub fn contains(&self, value: &P) -> Option<&P>
    where
        P: PartialEq,
    {
        self.iter().find(|item| *item == value)
    }

    /// Find the index of the first slot holding `value`.
    pub fn index_of(&self, value: &P) -> Option<usize>
    where
        P: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    /// Discard every handle, passing each to the destructor if one is set,
    /// then release the storage.
    pub fn clear(&mut self) {
        match self.destructor {
            Some(destructor) => self.inner.clear_with(destructor),
            None => self.inner.clear(),
        }
    }

    /// Consume the array, passing each handle to the destructor if one is set.
    #[inline]
    pub fn free(mut self) {
        self.clear();
    }

    /// See [`TypedArray::lower_bound_by`].
    #[inline]
    pub fn lower_bound_by<K, F>(&self, key: &K, cmp: F) -> usize
    where
        K: ?Sized,
        F: FnMut(&P, &K) -> Ordering,
    {
        self.inner.lower_bound_by(key, cmp)
    }

    /// See [`TypedArray::upper_bound_by`].
    #[inline]
    pub fn upper_bound_by<K, F>(&self, key: &K, cmp: F) -> usize
    where
        K: ?Sized,
        F: FnMut(&P, &K) -> Ordering,
    {
        self.inner.upper_bound_by(key, cmp)
    }

    /// See [`TypedArray::sort_by`].
    #[inline]
    pub fn sort_by<F>(&mut self, cmp: F)
    where
        F: FnMut(&P, &P) -> Ordering,
    {
        self.inner.sort_by(cmp)
    }

    /// Clone the handles along with the destructor, so that the clone also
    /// finalizes the handles it discards.
    pub fn clone_with_destructor(&self) -> Self
    where
        P: Clone,
        A: Clone,
    {
        Self {
            inner: self.inner.clone(),
            destructor: self.destructor,
        }
    }
}

/// The clone holds copies of the handles but no destructor.
/// Use [`PtrArray::clone_with_destructor`] to share finalization.
impl<P: Clone, A: Allocator + Clone> Clone for PtrArray<P, A> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            destructor: None,
        }
    }
}

impl<P, A: AllocatorDefault> ConstDefault for PtrArray<P, A> {
    const DEFAULT: Self = Self::new();
}

impl<P: fmt::Debug, A: Allocator> fmt::Debug for PtrArray<P, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PtrArray")
            .field("items", &self.as_slice())
            .field("destructor", &self.destructor.is_some())
            .finish()
    }
}

impl<P, A: AllocatorDefault> Default for PtrArray<P, A> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<P, A: Allocator> Deref for PtrArray<P, A> {
    type Target = [P];

    #[inline]
    fn deref(&self) -> &[P] {
        self.as_slice()
    }
}

impl<P, A: Allocator> Drop for PtrArray<P, A> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<P, A: Allocator> Extend<P> for PtrArray<P, A> {
    #[inline]
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        self.inner.extend(iter)
    }
}

impl<P, A: AllocatorDefault> FromIterator<P> for PtrArray<P, A> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::from_array(TypedArray::from_iter(iter), None)
    }
}

impl<P, A: Allocator> From<TypedArray<P, A>> for PtrArray<P, A> {
    #[inline]
    fn from(inner: TypedArray<P, A>) -> Self {
        Self::from_array(inner, None)
    }
}

impl<'a, P, A: Allocator> IntoIterator for &'a PtrArray<P, A> {
    type Item = &'a P;
    type IntoIter = slice::Iter<'a, P>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Compares the handles only; destructors are ignored.
impl<P1, A1, P2, A2> PartialEq<PtrArray<P2, A2>> for PtrArray<P1, A1>
where
    A1: Allocator,
    A2: Allocator,
    P1: PartialEq<P2>,
{
    #[inline]
    fn eq(&self, other: &PtrArray<P2, A2>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<P: Eq, A: Allocator> Eq for PtrArray<P, A> {}

impl<P1, A1, P2> PartialEq<[P2]> for PtrArray<P1, A1>
where
    P1: PartialEq<P2>,
    A1: Allocator,
{
    #[inline]
    fn eq(&self, other: &[P2]) -> bool {
        self.as_slice().eq(other)
    }
}

impl<P1, A1, P2> PartialEq<&[P2]> for PtrArray<P1, A1>
where
    P1: PartialEq<P2>,
    A1: Allocator,
{
    #[inline]
    fn eq(&self, other: &&[P2]) -> bool {
        self.as_slice().eq(*other)
    }
}

impl<P1, A1, P2, const N: usize> PartialEq<[P2; N]> for PtrArray<P1, A1>
where
    P1: PartialEq<P2>,
    A1: Allocator,
{
    #[inline]
    fn eq(&self, other: &[P2; N]) -> bool {
        self.as_slice().eq(&other[..])
    }
}
