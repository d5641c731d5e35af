//! Combinators over the raw value of a present field.
//!
//! Callbacks are taken as `Option<F>`: `None` is a missing callback. Each operation
//! checks a callback only on the branch that would run it, so an undefined field
//! skips `map`, `filter` and `flat_map` without looking at the callback at all.

use crate::{Tri, TriError};

impl<T> Tri<T> {
    /// Returns `self` when present, otherwise the field produced by `supplier`.
    ///
    /// On an undefined field the supplier is required and must produce a field.
    ///
    /// ```
    /// # use tri_state::Tri;
    /// let fallback = || Some(Tri::of("other"));
    /// assert_eq!(Tri::of("value").or(Some(fallback)), Ok(Tri::of("value")));
    /// assert_eq!(Tri::undefined().or(Some(fallback)), Ok(Tri::of("other")));
    /// ```
    pub fn or<F>(self, supplier: Option<F>) -> Result<Self, TriError>
    where F: FnOnce() -> Option<Self> {
        if self.is_present() {
            return Ok(self);
        }
        let supplier = supplier.ok_or_else(|| argument_null!("or", "supplier"))?;
        supplier().ok_or_else(|| argument_null!("or", "supplier"))
    }

    /// Returns the raw value when present, otherwise `other` as given.
    #[inline]
    pub fn or_else(self, other: Option<T>) -> Option<T> {
        match self.into_raw() {
            Ok(raw) => raw,
            Err(_) => other,
        }
    }

    /// Returns the raw value when present, otherwise the result of `supplier`.
    ///
    /// A supplier returning `None` yields a null result, which is not an error.
    pub fn or_else_get<F>(self, supplier: Option<F>) -> Result<Option<T>, TriError>
    where F: FnOnce() -> Option<T> {
        match self.into_raw() {
            Ok(raw) => Ok(raw),
            Err(_) => {
                let supplier = supplier.ok_or_else(|| argument_null!("or_else_get", "supplier"))?;
                Ok(supplier())
            }
        }
    }

    /// Returns the raw value when present. A present `null` is `Ok(None)`.
    ///
    /// ```
    /// # use tri_state::{Tri, TriError};
    /// assert_eq!(Tri::<u8>::null().or_else_throw(), Ok(None));
    /// assert_eq!(Tri::<u8>::undefined().or_else_throw(), Err(TriError::NoSuchElement));
    /// ```
    #[inline]
    pub fn or_else_throw(self) -> Result<Option<T>, TriError> {
        self.into_raw().map_err(|_| no_such_element!("or_else_throw"))
    }

    /// Returns the raw value when present, otherwise the error built by
    /// `error_supplier`.
    ///
    /// The supplier is neither checked nor called for a present field. On an undefined
    /// field a missing supplier, or one that produces no error, is reported through
    /// `E::from(TriError::ArgumentNull(..))`.
    pub fn or_else_throw_with<E, F>(self, error_supplier: Option<F>) -> Result<Option<T>, E>
    where
        E: From<TriError>,
        F: FnOnce() -> Option<E>,
    {
        match self.into_raw() {
            Ok(raw) => Ok(raw),
            Err(_) => {
                let Some(error_supplier) = error_supplier else {
                    return Err(argument_null!("or_else_throw_with", "error_supplier").into());
                };
                match error_supplier() {
                    Some(error) => Err(error),
                    None => Err(argument_null!("or_else_throw_with", "error_supplier").into()),
                }
            }
        }
    }

    /// Maps the raw value of a present field and rewraps the result with
    /// [`Tri::of_value`]. An undefined field stays undefined.
    ///
    /// ```
    /// # use tri_state::Tri;
    /// let len = |raw: Option<&str>| Some(raw.map_or(0, str::len));
    /// assert_eq!(Tri::of("abc").map(Some(len)), Ok(Tri::of(3)));
    /// assert_eq!(Tri::null().map(Some(len)), Ok(Tri::of(0)));
    /// assert_eq!(Tri::undefined().map(Some(len)), Ok(Tri::undefined()));
    /// ```
    pub fn map<U, F>(self, mapper: Option<F>) -> Result<Tri<U>, TriError>
    where F: FnOnce(Option<T>) -> Option<U> {
        let raw = match self.into_raw() {
            Ok(raw) => raw,
            Err(_) => return Ok(Tri::Undefined),
        };
        let mapper = mapper.ok_or_else(|| argument_null!("map", "mapper"))?;
        Ok(Tri::of_value(mapper(raw)))
    }

    /// Keeps a present field when `predicate` accepts its raw value, otherwise returns
    /// an undefined field.
    pub fn filter<P>(self, predicate: Option<P>) -> Result<Self, TriError>
    where P: FnOnce(Option<&T>) -> bool {
        if self.is_undefined() {
            return Ok(Self::Undefined);
        }
        let predicate = predicate.ok_or_else(|| argument_null!("filter", "predicate"))?;
        let keep = match &self {
            Self::Value(value) => predicate(Some(value)),
            _ => predicate(None),
        };
        Ok(if keep { self } else { Self::Undefined })
    }

    /// Maps the raw value of a present field to another field, returned as is.
    pub fn flat_map<U, F>(self, mapper: Option<F>) -> Result<Tri<U>, TriError>
    where F: FnOnce(Option<T>) -> Option<Tri<U>> {
        let raw = match self.into_raw() {
            Ok(raw) => raw,
            Err(_) => return Ok(Tri::Undefined),
        };
        let mapper = mapper.ok_or_else(|| argument_null!("flat_map", "mapper"))?;
        mapper(raw).ok_or_else(|| argument_null!("flat_map", "mapper"))
    }

    /// Runs `action` with the raw value of a present field. Does nothing for an
    /// undefined field.
    pub fn if_present<A>(self, action: Option<A>) -> Result<(), TriError>
    where A: FnOnce(Option<T>) {
        if let Ok(raw) = self.into_raw() {
            let action = action.ok_or_else(|| argument_null!("if_present", "action"))?;
            action(raw);
        }
        Ok(())
    }

    /// Runs `action` with the raw value of a present field, or `empty_action` for an
    /// undefined one. Exactly one of them runs, unless the one needed is `None`, in
    /// which case neither does.
    pub fn if_present_or_else<A, B>(
        self,
        action: Option<A>,
        empty_action: Option<B>,
    ) -> Result<(), TriError>
    where
        A: FnOnce(Option<T>),
        B: FnOnce(),
    {
        match self.into_raw() {
            Ok(raw) => {
                let action =
                    action.ok_or_else(|| argument_null!("if_present_or_else", "action"))?;
                action(raw);
            }
            Err(_) => {
                let empty_action = empty_action
                    .ok_or_else(|| argument_null!("if_present_or_else", "empty_action"))?;
                empty_action();
            }
        }
        Ok(())
    }
}
