//! Zero-or-one element views of a [`Tri`].
//!
//! An undefined field yields nothing; a present field yields exactly its raw value,
//! `None` included. Calling [`Tri::iter`] again starts over.

use crate::Tri;
use core::iter::FusedIterator;

/// Borrowing iterator returned by [`Tri::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: Option<Option<&'a T>>,
}

/// Owning iterator returned by `Tri::into_iter`.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<Option<T>>,
}

impl<T> Tri<T> {
    /// Iterates over the raw value of a present field.
    ///
    /// ```
    /// # use tri_state::Tri;
    /// let field = Tri::of(1);
    /// assert_eq!(field.iter().collect::<Vec<_>>(), [Some(&1)]);
    /// assert_eq!(field.iter().collect::<Vec<_>>(), [Some(&1)]);
    /// assert_eq!(Tri::<i32>::null().iter().collect::<Vec<_>>(), [None]);
    /// assert_eq!(Tri::<i32>::undefined().iter().count(), 0);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> { Iter { inner: self.as_ref().into_option() } }
}

// Manual impl: a derive would require `T: Clone`.
impl<T> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self { Self { inner: self.inner } }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = Option<&'a T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> { self.inner.take() }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> { self.inner.take() }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize { self.inner.is_some() as usize }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = Option<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> { self.inner.take() }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> { self.inner.take() }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize { self.inner.is_some() as usize }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Tri<T> {
    type Item = Option<T>;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> { IntoIter { inner: self.into_option() } }
}

impl<'a, T> IntoIterator for &'a Tri<T> {
    type Item = Option<&'a T>;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}
