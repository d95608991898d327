//! Character classes used when parsing and serializing media types.
//!
//! All checks work on `char`s (code points), never on bytes, so a multi-byte
//! UTF-8 sequence is judged as the single code point it encodes.

use std::borrow::Cow;

pub use quoted_string::error::CoreError;
use quoted_string::spec::{
    GeneralQSSpec, ParsingImpl, PartialCodePoint, QuotingClass, QuotingClassifier, State,
    WithoutQuotingValidator,
};

/// `true` for the HTTP whitespace code points (space, tab, LF, CR).
#[inline]
pub fn is_http_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

/// `true` if `ch` can appear in an (unquoted) HTTP token.
#[inline]
pub fn is_token_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || matches!(
            ch,
            '!' | '#' | '$' | '%' | '&' | '\'' | '*' | '+' | '-' | '.' | '^' | '_' | '`' | '|' | '~'
        )
}

/// `true` if `ch` can appear inside a quoted-string.
///
/// This is tab, `' '..='~'` and `U+0080..=U+00FF`.
#[inline]
pub fn is_quoted_string_token_char(ch: char) -> bool {
    matches!(ch, '\t' | ' '..='~' | '\u{80}'..='\u{FF}')
}

/// Quoting rules for parameter values.
///
/// Only `"` and `\` have to be escaped inside the quotes. Chars above
/// US-ASCII all map to the same partial code point, so they are accepted
/// here and the `U+00FF` limit is checked by [`is_quoted_string_token`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct HttpQuoting;

impl QuotingClassifier for HttpQuoting {
    fn classify_for_quoting(pcp: PartialCodePoint) -> QuotingClass {
        let iu8 = pcp.as_u8();
        if iu8 == b'"' || iu8 == b'\\' {
            QuotingClass::NeedsQuoting
        } else if iu8 > 0x7f || is_quoted_string_token_char(iu8 as char) {
            QuotingClass::QText
        } else {
            QuotingClass::Invalid
        }
    }
}

/// Quoted strings are read by the lenient scanner in `parse`, this only
/// exists to complete [`MediaTypeSpec`] and accepts everything.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct LenientParsing;

impl ParsingImpl for LenientParsing {
    fn can_be_quoted(_pcp: PartialCodePoint) -> bool {
        true
    }

    fn handle_normal_state(_pcp: PartialCodePoint) -> Result<(State<Self>, bool), CoreError> {
        Ok((State::Normal, true))
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct MediaTypeSpec;

impl GeneralQSSpec for MediaTypeSpec {
    type Quoting = HttpQuoting;
    type Parsing = LenientParsing;
}

/// Accepts non-empty HTTP tokens.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct TokenValidator {
    count: usize,
}

impl WithoutQuotingValidator for TokenValidator {
    fn next(&mut self, pcp: PartialCodePoint) -> bool {
        let iu8 = pcp.as_u8();
        let res = iu8 <= 0x7f && is_token_char(iu8 as char);
        if res {
            self.count += 1;
        }
        res
    }

    fn end(&self) -> bool {
        self.count > 0
    }
}

/// `true` if `input` is a non-empty token.
pub fn is_token(input: &str) -> bool {
    validate_token(input).is_ok()
}

/// Checks that `input` is a non-empty token.
///
/// On failure the byte offset of the first offending char is returned, for
/// an empty input this is `0`.
pub fn validate_token(input: &str) -> Result<(), usize> {
    let mut validator = TokenValidator::default();
    for (pos, ch) in input.char_indices() {
        if !validator.next(PartialCodePoint::from_code_point(ch as u32)) {
            return Err(pos);
        }
    }
    if validator.end() {
        Ok(())
    } else {
        Err(0)
    }
}

/// `true` if every char of `input` is a quoted-string token char.
///
/// The empty string is valid, it is serialized as `""`.
pub fn is_quoted_string_token(input: &str) -> bool {
    input.chars().all(is_quoted_string_token_char)
}

/// Renders a parameter value the way it has to appear after the `=`.
///
/// Values which are non-empty tokens are returned as is, everything else is
/// wrapped in double quotes with `"` and `\` escaped with a `\`. Values with
/// chars outside the quoted-string token class can not be rendered.
pub fn quote_if_needed(value: &str) -> Result<Cow<'_, str>, CoreError> {
    if !is_quoted_string_token(value) {
        return Err(CoreError::InvalidChar);
    }
    quoted_string::quote_if_needed::<MediaTypeSpec, _>(value, &mut TokenValidator::default())
}
