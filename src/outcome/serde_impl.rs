// -----------------------------------------------------------------------------
// src/outcome/serde_impl.rs
// -----------------------------------------------------------------------------

use super::Outcome;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

/// Serializes as `{"is_success": true, "value": ..}` or
/// `{"is_success": false, "error": ..}`.
impl<T: Serialize, E: Serialize> Serialize for Outcome<T, E> {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        let mut state = ser.serialize_struct("Outcome", 2)?;
        match &self.inner {
            Ok(value) => {
                state.serialize_field("is_success", &true)?;
                state.serialize_field("value", value)?;
            }
            Err(error) => {
                state.serialize_field("is_success", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

/// `None` only when the field is absent; a present `null` still reaches the
/// payload's own deserializer.
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>, E: Deserialize<'de>"))]
struct Wire<T, E> {
    is_success: bool,
    #[serde(default, deserialize_with = "present")]
    value: Option<T>,
    #[serde(default, deserialize_with = "present")]
    error: Option<E>,
}

fn present<'de, D, V>(de: D) -> Result<Option<V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    V::deserialize(de).map(Some)
}

impl<'de, T, E> Deserialize<'de> for Outcome<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        let wire = Wire::<T, E>::deserialize(de)?;
        match (wire.is_success, wire.value, wire.error) {
            (true, Some(value), None) => Ok(Outcome::success(value)),
            (false, None, Some(error)) => Ok(Outcome::failure(error)),
            (true, _, Some(_)) => Err(de::Error::custom(
                "a successful outcome must not carry an error",
            )),
            (false, Some(_), _) => Err(de::Error::custom(
                "a failed outcome must not carry a value",
            )),
            (true, None, None) => Err(de::Error::missing_field("value")),
            (false, None, None) => Err(de::Error::missing_field("error")),
        }
    }
}
