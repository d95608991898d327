use std::fmt::{self, Write};

use crate::grammar::quote_if_needed;

const TYPE_SEP: char = '/';
const PARAM_SEP: char = ';';
const PARAM_KV_SEP: char = '=';

/// Writes the canonical form `type/subtype;name=value...` into `out`.
pub(crate) fn write_media_type<'a, W, I>(out: &mut W, essence: &str, params: I) -> fmt::Result
where
    W: Write,
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    out.write_str(essence)?;
    for (name, value) in params {
        out.write_char(PARAM_SEP)?;
        out.write_str(name)?;
        out.write_char(PARAM_KV_SEP)?;
        out.write_str(&quote_if_needed(value).map_err(|_| fmt::Error)?)?;
    }
    Ok(())
}

/// Builds the `type/subtype` buffer, returning it with the index of the `/`.
pub(crate) fn create_essence(type_: &str, subtype: &str) -> (String, usize) {
    let mut buffer = String::with_capacity(type_.len() + 1 + subtype.len());
    buffer.push_str(type_);
    let slash_idx = buffer.len();
    buffer.push(TYPE_SEP);
    buffer.push_str(subtype);
    buffer.make_ascii_lowercase();
    (buffer, slash_idx)
}

/// Encodes every char as the byte of the same value.
///
/// Returns `None` if a char above `U+00FF` is found.
pub(crate) fn isomorphic_encode(input: &str) -> Option<Vec<u8>> {
    input.chars().map(|ch| u8::try_from(ch).ok()).collect()
}

pub(crate) fn isomorphic_decode(input: &[u8]) -> String {
    input.iter().map(|&byte| char::from(byte)).collect()
}
