use core::fmt;

/// Failures raised by [`Tri`](crate::Tri) operations.
///
/// Both are deterministic: they depend only on the state of the value and on which
/// arguments the caller passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriError {
    /// A callback the taken branch needs was `None`, or a supplier produced `None`
    /// where an object is required. Carries the argument name.
    ArgumentNull(&'static str),
    /// [`Tri::or_else_throw`](crate::Tri::or_else_throw) on an undefined field.
    NoSuchElement,
}

impl TriError {
    #[inline]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::ArgumentNull(_) => "argument_null",
            Self::NoSuchElement => "no_such_element",
        }
    }
}

impl fmt::Display for TriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArgumentNull(name) => write!(f, "argument `{name}` must not be null"),
            Self::NoSuchElement => f.write_str("no value present"),
        }
    }
}

impl core::error::Error for TriError {}

// Builds an `ArgumentNull` error, tracing the failing operation when enabled.
macro_rules! argument_null {
    ($op:literal, $arg:literal) => {{
        #[cfg(feature = "tracing")]
        ::tracing::trace!(op = $op, argument = $arg, "argument is null");
        $crate::TriError::ArgumentNull($arg)
    }};
}

macro_rules! no_such_element {
    ($op:literal) => {{
        #[cfg(feature = "tracing")]
        ::tracing::trace!(op = $op, "no value present");
        $crate::TriError::NoSuchElement
    }};
}

#[cfg(all(test, feature = "tracing"))]
mod tests {
    extern crate std;

    use crate::{Tri, TriError};
    use std::{
        format,
        string::String,
        sync::{Arc, Mutex},
        vec::Vec,
    };
    use tracing::{
        Event, Metadata, Subscriber,
        field::{Field, Visit},
        span,
    };

    /// Keeps every event as a `name=value ` line.
    #[derive(Clone, Default)]
    struct Recorder {
        events: Arc<Mutex<Vec<String>>>,
    }

    struct Fields(String);

    impl Visit for Fields {
        fn record_debug(&mut self, field: &Field, value: &dyn core::fmt::Debug) {
            self.0.push_str(&format!("{}={value:?} ", field.name()));
        }
    }

    impl Subscriber for Recorder {
        fn enabled(&self, _: &Metadata<'_>) -> bool { true }
        fn new_span(&self, _: &span::Attributes<'_>) -> span::Id { span::Id::from_u64(1) }
        fn record(&self, _: &span::Id, _: &span::Record<'_>) {}
        fn record_follows_from(&self, _: &span::Id, _: &span::Id) {}
        fn event(&self, event: &Event<'_>) {
            let mut fields = Fields(String::new());
            event.record(&mut fields);
            self.events.lock().unwrap().push(fields.0);
        }
        fn enter(&self, _: &span::Id) {}
        fn exit(&self, _: &span::Id) {}
    }

    fn traced<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
        let recorder = Recorder::default();
        let result = tracing::subscriber::with_default(recorder.clone(), f);
        let events = recorder.events.lock().unwrap().clone();
        (result, events)
    }

    type Mapper = fn(Option<u8>) -> Option<u8>;

    #[test]
    fn test_argument_null_is_traced() {
        let (result, events) = traced(|| Tri::<u8>::null().map(None::<Mapper>));
        assert_eq!(result, Err(TriError::ArgumentNull("mapper")));
        assert_eq!(events.len(), 1, "{events:?}");
        assert!(events[0].contains(r#"op="map""#), "{}", events[0]);
        assert!(events[0].contains(r#"argument="mapper""#), "{}", events[0]);
        assert!(events[0].contains("argument is null"), "{}", events[0]);
    }

    #[test]
    fn test_no_such_element_is_traced() {
        let (result, events) = traced(|| Tri::<u8>::undefined().or_else_throw());
        assert_eq!(result, Err(TriError::NoSuchElement));
        assert_eq!(events.len(), 1, "{events:?}");
        assert!(events[0].contains(r#"op="or_else_throw""#), "{}", events[0]);
        assert!(events[0].contains("no value present"), "{}", events[0]);
    }

    #[test]
    fn test_success_is_silent() {
        let (results, events) = traced(|| {
            (
                Tri::of(1u8).map(Some((|v: Option<u8>| v) as Mapper)),
                Tri::<u8>::undefined().map(None::<Mapper>),
                Tri::of(2u8).or_else_throw(),
            )
        });
        assert_eq!(results, (Ok(Tri::of(1)), Ok(Tri::undefined()), Ok(Some(2))));
        assert!(events.is_empty(), "{events:?}");
    }
}
