//! A three-state optional value for documents with partial updates.
//!
//! A plain `Option<T>` collapses "the field is missing" and "the field is `null`" into
//! the same `None`. PATCH-style APIs need both: a missing field means "leave it alone",
//! an explicit `null` means "clear it". [`Tri`] keeps the three cases apart.
//!
//! ```
//! # use tri_state::Tri;
//! let missing: Tri<u32> = Tri::undefined();
//! let cleared: Tri<u32> = Tri::of_value(None);
//! let set = Tri::of_value(Some(7));
//!
//! let mut stored = Some(3);
//! assert!(!missing.merge_into(&mut stored));
//! assert_eq!(stored, Some(3));
//! assert!(set.merge_into(&mut stored));
//! assert_eq!(stored, Some(7));
//! assert!(cleared.merge_into(&mut stored));
//! assert_eq!(stored, None);
//! ```

#![no_std]

#[macro_use]
mod error;
mod iter;
mod stream;

#[cfg(feature = "serde")]
mod serde_impls;


pub use error::TriError;
pub use iter::{IntoIter, Iter};

use core::ops::Deref;

/// A field that is either absent, present as `null`, or present with a value.
///
/// The raw value of a present field is an `Option<T>`: `None` for [`Tri::Null`],
/// `Some(v)` for [`Tri::Value`]. [`Tri::Undefined`] has no raw value at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tri<T> {
    /// The field is not present in the document.
    Undefined,
    /// The field is present with an explicit `null`.
    Null,
    /// The field is present with a value.
    Value(T),
}

impl<T> Default for Tri<T> {
    #[inline(always)]
    fn default() -> Self { Self::Undefined }
}

impl<T> Tri<T> {
    /// The undefined instance.
    #[inline(always)]
    pub const fn undefined() -> Self { Self::Undefined }

    /// A field present as `null`.
    #[inline(always)]
    pub const fn null() -> Self { Self::Null }

    /// A field present with `value`.
    #[inline(always)]
    pub const fn of(value: T) -> Self { Self::Value(value) }

    /// Wraps a raw value: `None` becomes [`Tri::Null`], `Some(v)` becomes
    /// [`Tri::Value`]. Never produces [`Tri::Undefined`].
    #[inline]
    pub fn of_value(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Value(value),
            None => Self::Null,
        }
    }

    #[inline(always)]
    pub const fn is_undefined(&self) -> bool { matches!(*self, Self::Undefined) }

    /// Returns `true` for both [`Tri::Null`] and [`Tri::Value`].
    #[inline(always)]
    pub const fn is_present(&self) -> bool { !self.is_undefined() }

    #[inline(always)]
    pub const fn is_null(&self) -> bool { matches!(*self, Self::Null) }

    #[inline(always)]
    pub const fn is_value(&self) -> bool { matches!(*self, Self::Value(_)) }

    /// Converts from `&Tri<T>` to `Tri<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Tri<&T> {
        match *self {
            Self::Undefined => Tri::Undefined,
            Self::Null => Tri::Null,
            Self::Value(ref value) => Tri::Value(value),
        }
    }

    /// Converts from `&Tri<T>` to `Tri<&T::Target>`.
    #[inline]
    pub fn as_deref(&self) -> Tri<&T::Target>
    where T: Deref {
        match self {
            Self::Undefined => Tri::Undefined,
            Self::Null => Tri::Null,
            Self::Value(value) => Tri::Value(value.deref()),
        }
    }

    /// `None` for undefined, `Some(raw)` for a present field.
    #[inline]
    pub fn into_option(self) -> Option<Option<T>> {
        match self {
            Self::Undefined => None,
            Self::Null => Some(None),
            Self::Value(value) => Some(Some(value)),
        }
    }

    /// Applies this field as a partial update to `target`.
    ///
    /// An undefined field leaves `target` alone, a null one clears it and a value
    /// replaces it. Returns whether `target` was written.
    #[inline]
    pub fn merge_into(self, target: &mut Option<T>) -> bool {
        match self {
            Self::Undefined => false,
            Self::Null => {
                *target = None;
                true
            }
            Self::Value(value) => {
                *target = Some(value);
                true
            }
        }
    }

    /// Splits a present field into its raw value. `Err(self)` hands back an undefined
    /// field untouched.
    #[inline]
    pub(crate) fn into_raw(self) -> Result<Option<T>, Self> {
        match self {
            Self::Undefined => Err(self),
            Self::Null => Ok(None),
            Self::Value(value) => Ok(Some(value)),
        }
    }
}

impl<T> From<Option<T>> for Tri<T> {
    #[inline]
    fn from(value: Option<T>) -> Self { Self::of_value(value) }
}

impl<T> From<Option<Option<T>>> for Tri<T> {
    #[inline]
    fn from(value: Option<Option<T>>) -> Self {
        match value {
            None => Self::Undefined,
            Some(raw) => Self::of_value(raw),
        }
    }
}

impl<T> From<Tri<T>> for Option<Option<T>> {
    #[inline]
    fn from(value: Tri<T>) -> Self { value.into_option() }
}

impl<'a, T> From<&'a Tri<T>> for Tri<&'a T> {
    #[inline]
    fn from(value: &'a Tri<T>) -> Self { value.as_ref() }
}
