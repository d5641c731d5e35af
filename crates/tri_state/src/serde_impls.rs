//! Serde support.
//!
//! The distinction between a missing field and a `null` one lives in the containing
//! struct, so every `Tri` field needs both attributes:
//!
//! ```
//! # use serde::{Deserialize, Serialize};
//! # use tri_state::Tri;
//! #[derive(Serialize, Deserialize)]
//! struct UserPatch {
//!     #[serde(default, skip_serializing_if = "Tri::is_undefined")]
//!     nickname: Tri<String>,
//! }
//!
//! let patch: UserPatch = serde_json::from_str("{}").unwrap();
//! assert!(patch.nickname.is_undefined());
//! let patch: UserPatch = serde_json::from_str(r#"{"nickname":null}"#).unwrap();
//! assert!(patch.nickname.is_null());
//! assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"nickname":null}"#);
//! ```
//!
//! Without `#[serde(default)]` serde reports a missing field through
//! `deserialize_option`, which reads as `null`.

use crate::Tri;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<T> Serialize for Tri<T>
where T: Serialize
{
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer {
        match self {
            Tri::Undefined | Tri::Null => serializer.serialize_none(),
            Tri::Value(value) => serializer.serialize_some(value),
        }
    }
}

impl<'de, T> Deserialize<'de> for Tri<T>
where T: Deserialize<'de>
{
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: Deserializer<'de> {
        Option::<T>::deserialize(deserializer).map(Tri::of_value)
    }
}
