use std::fmt::{self, Debug};
use std::iter::{ExactSizeIterator, Iterator};
use std::slice;
use std::str::FromStr;

use crate::error::{BuildError, ParamNotFound, ParserError};
use crate::gen::{create_essence, isomorphic_decode, isomorphic_encode, write_media_type};
use crate::grammar::{is_quoted_string_token, is_token, validate_token};
use crate::parse::{parse, validate, ParseResult};

/// A parsed media type, e.g. `text/html;charset=utf-8`.
///
/// Type, subtype and parameter names are always ASCII lowercase, parameter
/// values are stored without quotes or escapes. Parameters keep the order in
/// which they were first seen, which is the order they are serialized in.
#[derive(Clone, Debug)]
pub struct MediaType {
    //  type / subtype
    //       \
    //        \slash_idx
    essence: String,
    slash_idx: usize,
    params: Vec<(String, String)>,
}

impl MediaType {
    /// Parses `input`, ignoring surrounding HTTP whitespace.
    ///
    /// ```
    /// use media_type::MediaType;
    ///
    /// let mt = MediaType::parse("Text/HTML; Charset=\"utf-8\"").unwrap();
    /// assert_eq!(mt.essence(), "text/html");
    /// assert_eq!(mt.get_param("charset"), Some("utf-8"));
    /// assert_eq!(mt.to_string(), "text/html;charset=utf-8");
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParserError> {
        let parse_result: ParseResult = parse(input)?;
        Ok(parse_result.into())
    }

    /// Parses `input` interpreting every byte as the code point of the same
    /// value, so arbitrary header bytes can be handled without UTF-8 decoding.
    pub fn parse_bytes(input: &[u8]) -> Result<Self, ParserError> {
        Self::parse(&isomorphic_decode(input))
    }

    /// `true` if `input` would parse successfully.
    pub fn validate(input: &str) -> bool {
        validate(input)
    }

    /// Creates a media type from its components.
    ///
    /// Type, subtype and parameter names are lowercased. Unlike parsing,
    /// an invalid or duplicate parameter is an error instead of being dropped.
    ///
    /// ```
    /// use media_type::MediaType;
    ///
    /// let mt = MediaType::from_parts("text", "plain", vec![("charset", "utf-8")]).unwrap();
    /// assert_eq!(mt.to_string(), "text/plain;charset=utf-8");
    /// ```
    pub fn from_parts<T, ST, PI, IN, IV>(type_: T, subtype: ST, params: PI) -> Result<Self, BuildError>
    where
        T: AsRef<str>,
        ST: AsRef<str>,
        PI: IntoIterator<Item = (IN, IV)>,
        IN: AsRef<str>,
        IV: AsRef<str>,
    {
        let type_ = type_.as_ref();
        validate_token(type_).map_err(|pos| BuildError::InvalidType {
            type_: type_.to_owned(),
            pos,
        })?;

        let subtype = subtype.as_ref();
        validate_token(subtype).map_err(|pos| BuildError::InvalidSubType {
            subtype: subtype.to_owned(),
            pos,
        })?;

        let (essence, slash_idx) = create_essence(type_, subtype);

        let mut param_list: Vec<(String, String)> = Vec::new();
        for (name, value) in params {
            let name = name.as_ref();
            let value = value.as_ref();
            if !is_token(name) {
                return Err(BuildError::InvalidParamName { name: name.to_owned() });
            }
            let name = name.to_ascii_lowercase();
            if !is_quoted_string_token(value) {
                return Err(BuildError::InvalidParamValue { name });
            }
            if param_list.iter().any(|(existing, _)| *existing == name) {
                return Err(BuildError::DuplicateParam { name });
            }
            param_list.push((name, value.to_owned()));
        }

        Ok(MediaType {
            essence,
            slash_idx,
            params: param_list,
        })
    }

    pub fn type_(&self) -> &str {
        &self.essence[..self.slash_idx]
    }

    pub fn subtype(&self) -> &str {
        &self.essence[self.slash_idx + 1..]
    }

    /// The `type/subtype` part, without any parameters.
    pub fn essence(&self) -> &str {
        &self.essence
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn params(&self) -> Params<'_> {
        Params {
            iter: self.params.iter(),
        }
    }

    /// The value of parameter `name`, compared ignoring ASCII case.
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Like [`get_param`](Self::get_param) but fails with [`ParamNotFound`].
    pub fn param(&self, name: &str) -> Result<&str, ParamNotFound> {
        self.get_param(name).ok_or_else(|| ParamNotFound {
            name: name.to_owned(),
        })
    }

    pub fn has_param(&self, name: &str) -> bool {
        self.get_param(name).is_some()
    }

    /// `true` if the `charset` parameter is `utf-8` or `utf8` (in any case).
    pub fn has_utf8_charset(&self) -> bool {
        self.get_param("charset")
            .map(|charset| charset.eq_ignore_ascii_case("utf-8") || charset.eq_ignore_ascii_case("utf8"))
            .unwrap_or(false)
    }

    /// The canonical serialization encoded one byte per char.
    pub fn to_bytes(&self) -> Vec<u8> {
        // type, subtype and names are tokens and values are limited to
        // U+00FF, so every char fits into a byte
        let rendered = self.to_string();
        debug_assert!(isomorphic_encode(&rendered).is_some(), "{:?} is not latin1", rendered);
        rendered.chars().map(|ch| u8::try_from(ch).unwrap_or(b'?')).collect()
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, fter: &mut fmt::Formatter) -> fmt::Result {
        write_media_type(fter, &self.essence, self.params())
    }
}

impl FromStr for MediaType {
    type Err = ParserError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        MediaType::parse(input)
    }
}

impl<'a> TryFrom<&'a str> for MediaType {
    type Error = ParserError;

    fn try_from(input: &'a str) -> Result<Self, Self::Error> {
        MediaType::parse(input)
    }
}

impl PartialEq for MediaType {
    // names are unique, so equal length plus "every param of other is in self"
    // means both hold the same set of params
    fn eq(&self, other: &MediaType) -> bool {
        self.essence == other.essence
            && self.params.len() == other.params.len()
            && other
                .params()
                .all(|(name, value)| self.get_param(name) == Some(value))
    }
}

impl Eq for MediaType {}

impl<'a> From<ParseResult<'a>> for MediaType {
    fn from(pres: ParseResult<'a>) -> Self {
        let (essence, slash_idx) = create_essence(pres.type_, pres.subtype);
        MediaType {
            essence,
            slash_idx,
            params: pres.params,
        }
    }
}

#[derive(Clone)]
pub struct Params<'a> {
    iter: slice::Iter<'a, (String, String)>,
}

impl<'a> Iterator for Params<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter
            .next()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a> ExactSizeIterator for Params<'a> {
    #[inline]
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<'a> Debug for Params<'a> {
    fn fmt(&self, fter: &mut fmt::Formatter) -> fmt::Result {
        let metoo = self.clone();
        fter.debug_list().entries(metoo).finish()
    }
}

#[cfg(test)]
mod test {
    use super::MediaType;
    use crate::error::{ErrorKind, ParamNotFound};

    #[test]
    fn simple_parse() {
        let mt = assert_ok!(MediaType::parse("text/plain; charset=utf-8"));
        assert!(mt.has_utf8_charset());
        assert_eq!(mt.type_(), "text");
        assert_eq!(mt.subtype(), "plain");
        assert_eq!(mt.essence(), "text/plain");
        assert_eq!(mt.to_string(), "text/plain;charset=utf-8");
    }

    #[test]
    fn parsing_normalizes_whitespace_and_case() {
        let mt = assert_ok!(MediaType::parse(" TEXT/Plain   ;CharSet=\"UTF8\" "));
        assert!(mt.has_utf8_charset());
        assert_eq!(mt.to_string(), "text/plain;charset=UTF8");
    }

    #[test]
    fn case_insensitive_round_trip() {
        let mt = assert_ok!(MediaType::parse("Text/HTML;Charset=\"utf-8\""));
        assert_eq!(mt.to_string(), "text/html;charset=utf-8");
    }

    #[test]
    fn parse_errors_are_classified() {
        assert_eq!(MediaType::parse("texthtml").unwrap_err().kind(), ErrorKind::NoSubType);
        assert_eq!(MediaType::parse("/html").unwrap_err().kind(), ErrorKind::NoType);
        assert_eq!(MediaType::parse("text/ht ml").unwrap_err().kind(), ErrorKind::InvalidSubType);
        assert!("f o o / bar".parse::<MediaType>().is_err());
    }

    #[test]
    fn params_iter_behaviour() {
        let mt = assert_ok!(MediaType::parse("test/plain; c1=abc; c2=def"));
        let mut iter = mt.params();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.size_hint(), (2, Some(2)));

        assert_eq!(iter.next(), Some(("c1", "abc")));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.size_hint(), (1, Some(1)));

        assert_eq!(iter.next(), Some(("c2", "def")));
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn params_debug_lists_pairs() {
        let mt = assert_ok!(MediaType::parse("a/b;x=1;y=2"));
        assert_eq!(format!("{:?}", mt.params()), r#"[("x", "1"), ("y", "2")]"#);
    }

    #[test]
    fn param_accessors() {
        let mt = assert_ok!(MediaType::parse("text/plain;charset=utf-8;foo=BAR"));
        assert!(mt.has_param("charset"));
        assert!(mt.has_param("FOO"));
        assert!(!mt.has_param("baz"));
        assert_eq!(mt.get_param("foo"), Some("BAR"));
        assert_eq!(mt.param("charset"), Ok("utf-8"));
        assert_eq!(mt.param("baz"), Err(ParamNotFound { name: "baz".into() }));
    }

    #[test]
    fn values_are_case_sensitive() {
        let mt = assert_ok!(MediaType::parse("multipart/form-data; boundary=ABCDEFG"));
        assert_eq!(mt.get_param("boundary"), Some("ABCDEFG"));
        assert_ne!(mt.get_param("boundary"), Some("abcdefg"));
    }

    #[test]
    fn values_keep_non_ascii() {
        let mt = assert_ok!(MediaType::parse("application/x-custom; param=\"Stra\u{df}e\""));
        assert_eq!(mt.get_param("param"), Some("Stra\u{df}e"));
        assert_eq!(mt.to_string(), "application/x-custom;param=\"Stra\u{df}e\"");
    }

    #[test]
    fn quoted_tab() {
        let mt = assert_ok!(MediaType::parse("application/x-custom;param=\"\\\t\""));
        assert_eq!(mt.get_param("param"), Some("\t"));
    }

    #[test]
    fn eq_is_order_independent() {
        let mt1 = assert_ok!(MediaType::parse("text/plain; p1=\"a\"; p2=b"));
        let mt2 = assert_ok!(MediaType::parse("TEXT/plain; p2=\"b\"; p1=a"));
        assert_eq!(mt1, mt2);
    }

    #[test]
    fn ne_on_value_or_count() {
        let mt1 = assert_ok!(MediaType::parse("text/plain;a=1"));
        assert_ne!(mt1, assert_ok!(MediaType::parse("text/plain;a=2")));
        assert_ne!(mt1, assert_ok!(MediaType::parse("text/plain;a=1;b=1")));
        assert_ne!(mt1, assert_ok!(MediaType::parse("text/css;a=1")));
    }

    #[test]
    fn bytes_round_trip() {
        let mt = assert_ok!(MediaType::parse_bytes(b"text/html;test=\xFF"));
        assert_eq!(mt.get_param("test"), Some("\u{FF}"));
        assert_eq!(mt.to_bytes(), b"text/html;test=\"\xFF\"".to_vec());
    }

    #[test]
    fn to_bytes_matches_display() {
        let mt = assert_ok!(MediaType::from_parts("text", "plain", vec![("q", "\u{E9} \"x\"")]));
        let expected = mt.to_string().chars().map(|ch| ch as u8).collect::<Vec<u8>>();
        assert_eq!(mt.to_bytes(), expected);
        assert_eq!(mt.to_bytes(), b"text/plain;q=\"\xE9 \\\"x\\\"\"".to_vec());
    }

    #[test]
    fn bytes_above_ascii_are_not_tokens() {
        let err = MediaType::parse_bytes(b"\xE9/html").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidType);
    }

    mod from_parts {
        use super::super::MediaType;
        use crate::error::BuildError;

        fn empty() -> Vec<(&'static str, &'static str)> {
            Vec::new()
        }

        #[test]
        fn validates_type() {
            let mt = MediaType::from_parts("ba{d", "ok", empty());
            assert_eq!(
                mt,
                Err(BuildError::InvalidType {
                    type_: "ba{d".into(),
                    pos: 2
                })
            );
        }

        #[test]
        fn validates_subtype() {
            let mt = MediaType::from_parts("text", "n[k", empty());
            assert_eq!(
                mt,
                Err(BuildError::InvalidSubType {
                    subtype: "n[k".into(),
                    pos: 1
                })
            );
        }

        #[test]
        fn validates_parameter_names() {
            let mt = MediaType::from_parts("text", "x.my", vec![("good", "value"), ("b[ad]", "key")]);
            assert_eq!(mt, Err(BuildError::InvalidParamName { name: "b[ad]".into() }));
        }

        #[test]
        fn validates_parameter_values() {
            let mt = MediaType::from_parts("text", "x.my", vec![("key", "va\0lue")]);
            assert_eq!(mt, Err(BuildError::InvalidParamValue { name: "key".into() }));
        }

        #[test]
        fn rejects_duplicates() {
            let mt = MediaType::from_parts("text", "x.my", vec![("key", "a"), ("KEY", "b")]);
            assert_eq!(mt, Err(BuildError::DuplicateParam { name: "key".into() }));
        }

        #[test]
        fn simple_creation_works() {
            let mt = assert_ok!(MediaType::from_parts("Text", "Plain", empty()));
            assert_eq!(mt.to_string(), "text/plain");
            assert_eq!(mt, assert_ok!(MediaType::parse("text/plain")));
        }

        #[test]
        fn use_quoting_if_needed() {
            let mt = assert_ok!(MediaType::from_parts(
                "text",
                "x.plain",
                vec![("charset", "utf-8"), ("source", "dat file")]
            ));
            assert_eq!(mt.to_string(), "text/x.plain;charset=utf-8;source=\"dat file\"");
        }

        #[test]
        fn use_quoted_pair_if_needed() {
            let mt = assert_ok!(MediaType::from_parts("text", "x.mage", vec![("comment", "it\"has")]));
            assert_eq!(mt.to_string(), r#"text/x.mage;comment="it\"has""#);
        }
    }
}
