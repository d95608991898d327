//! Serde support, `MediaType` is (de-)serialized as its canonical string.
//!
//! [`serialize`] and [`deserialize`] can also be used with
//! `#[serde(with = "media_type::serde")]`.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::MediaType;

/// # Errors
pub fn serialize<S>(media_type: &MediaType, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.collect_str(media_type)
}

/// # Errors
///
/// If the string is not a valid media type.
pub fn deserialize<'de, D>(deserializer: D) -> Result<MediaType, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(MediaTypeVisitor)
}

struct MediaTypeVisitor;

impl<'de> Visitor<'de> for MediaTypeVisitor {
    type Value = MediaType;

    fn expecting(&self, fter: &mut fmt::Formatter) -> fmt::Result {
        fter.write_str("a media type string like \"text/plain;charset=utf-8\"")
    }

    fn visit_str<E>(self, value: &str) -> Result<MediaType, E>
    where
        E: de::Error,
    {
        MediaType::parse(value).map_err(E::custom)
    }
}

impl Serialize for MediaType {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize(self, s)
    }
}

impl<'de> Deserialize<'de> for MediaType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize(deserializer)
    }
}

#[cfg(test)]
mod test {
    use crate::MediaType;

    #[test]
    fn serializes_canonical_form() {
        let mt = assert_ok!(MediaType::parse("Text/HTML; Charset=\"utf-8\""));
        assert_eq!(assert_ok!(serde_json::to_string(&mt)), "\"text/html;charset=utf-8\"");
    }

    #[test]
    fn deserializes_by_parsing() {
        let mt: MediaType = assert_ok!(serde_json::from_str("\" text/plain ;a=\\\"b\\\\\\\"c\\\" \""));
        assert_eq!(mt.get_param("a"), Some("b\"c"));
    }

    #[test]
    fn rejects_invalid() {
        let res = serde_json::from_str::<MediaType>("\"texthtml\"");
        assert!(res.is_err());
    }
}
