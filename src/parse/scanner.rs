use crate::grammar::is_http_whitespace;

/// A cursor over a `&str` which moves forward one code point at a time.
///
/// `pos` is always a byte offset on a char boundary of `input`, so slicing
/// `input` with positions handed out by the scanner can not panic.
#[derive(Debug, Clone)]
pub(crate) struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Scanner { input, pos: 0 }
    }

    /// The char under the cursor, `None` once the end of input is reached.
    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    #[inline]
    pub(crate) fn at(&self, ch: char) -> bool {
        self.peek() == Some(ch)
    }

    /// Moves past the current char, a no-op at the end of input.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if let Some(ch) = self.peek() {
            self.pos += ch.len_utf8();
        }
    }

    /// Collects chars until `stop` matches or the input ends.
    ///
    /// The cursor is left on the char `stop` matched on.
    pub(crate) fn collect_sequence<F>(&mut self, mut stop: F) -> &'a str
    where
        F: FnMut(char) -> bool,
    {
        let input: &'a str = self.input;
        let start = self.pos;
        let rest = &input[start..];
        let len = rest
            .char_indices()
            .find(|&(_, ch)| stop(ch))
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());
        self.pos = start + len;
        &rest[..len]
    }

    /// Collects chars up to (excluding) the first `stop` char.
    pub(crate) fn collect_until(&mut self, stop: &[char]) -> &'a str {
        self.collect_sequence(|ch| stop.contains(&ch))
    }

    pub(crate) fn skip_whitespace(&mut self) {
        self.collect_sequence(|ch| !is_http_whitespace(ch));
    }

    /// Extracts the content of a quoted string starting at the cursor.
    ///
    /// Escaped chars are taken literally, a `\` at the end of input is kept
    /// as is and a missing closing quote ends the value at the end of input.
    /// The cursor is left behind the closing quote.
    ///
    /// # Panics (debug)
    ///
    /// If the cursor is not on a `"`.
    pub(crate) fn collect_quoted_string(&mut self) -> String {
        debug_assert!(self.at('"'), "quoted string has to start with a '\"'");
        self.advance();

        let mut value = String::new();
        loop {
            value.push_str(self.collect_until(&['"', '\\']));
            match self.peek() {
                None => break,
                Some('\\') => {
                    self.advance();
                    match self.peek() {
                        Some(escaped) => {
                            value.push(escaped);
                            self.advance();
                        }
                        None => {
                            value.push('\\');
                            break;
                        }
                    }
                }
                Some(_) => {
                    // closing '"'
                    self.advance();
                    break;
                }
            }
        }
        value
    }
}
