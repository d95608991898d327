use crate::error::{ErrorKind, ParserError};
use crate::grammar::{is_http_whitespace, is_quoted_string_token, is_token};

use self::scanner::Scanner;

mod scanner;

/// The raw outcome of a successful parse.
///
/// `type_` and `subtype` are slices of the input and still have their
/// original case, parameter names are already lowercased.
#[derive(Debug, Clone)]
pub(crate) struct ParseResult<'a> {
    pub(crate) type_: &'a str,
    pub(crate) subtype: &'a str,
    pub(crate) params: Vec<(String, String)>,
}

pub(crate) fn validate(input: &str) -> bool {
    parse(input).is_ok()
}

pub(crate) fn parse(input: &str) -> Result<ParseResult<'_>, ParserError> {
    let trimmed = input.trim_matches(is_http_whitespace);
    let mut scanner = Scanner::new(trimmed);

    let type_ = scanner.collect_until(&['/']);
    if type_.is_empty() {
        return Err(ErrorKind::NoType.with_input(input));
    }
    if !is_token(type_) {
        return Err(ErrorKind::InvalidType.with_input(input));
    }
    if scanner.is_eof() {
        return Err(ErrorKind::NoSubType.with_input(input));
    }
    scanner.advance();

    let subtype = scanner
        .collect_until(&[';'])
        .trim_end_matches(is_http_whitespace);
    if subtype.is_empty() {
        return Err(ErrorKind::NoSubType.with_input(input));
    }
    if !is_token(subtype) {
        return Err(ErrorKind::InvalidSubType.with_input(input));
    }

    let params = parse_params(&mut scanner);

    Ok(ParseResult { type_, subtype, params })
}

/// Parses the `;name=value` list following the subtype.
///
/// Malformed parameters are skipped, they never fail the parse.
fn parse_params(scanner: &mut Scanner<'_>) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = Vec::new();

    while !scanner.is_eof() {
        // the ';' ending the previous segment
        scanner.advance();
        scanner.skip_whitespace();

        let name = scanner.collect_until(&[';', '=']).to_ascii_lowercase();

        match scanner.peek() {
            Some('=') => scanner.advance(),
            _ => {
                trace_param!(name = %name, reason = "no value", "dropping parameter");
                continue;
            }
        }

        // a dangling `name=` ends parameter parsing altogether
        if scanner.is_eof() {
            trace_param!(name = %name, reason = "dangling '='", "stop parsing parameters");
            break;
        }

        let value = if scanner.at('"') {
            let value = scanner.collect_quoted_string();
            scanner.collect_until(&[';']);
            value
        } else {
            let value = scanner
                .collect_until(&[';'])
                .trim_end_matches(is_http_whitespace);
            if value.is_empty() {
                trace_param!(name = %name, reason = "empty value", "dropping parameter");
                continue;
            }
            value.to_owned()
        };

        match check_param(&params, &name, &value) {
            Ok(()) => params.push((name, value)),
            Err(_reason) => {
                trace_param!(name = %name, reason = _reason, "dropping parameter");
            }
        }
    }

    params
}

fn check_param(params: &[(String, String)], name: &str, value: &str) -> Result<(), &'static str> {
    if !is_token(name) {
        return Err("invalid name");
    }
    if !is_quoted_string_token(value) {
        return Err("invalid value");
    }
    if params.iter().any(|(existing, _)| existing == name) {
        return Err("duplicate");
    }
    Ok(())
}
