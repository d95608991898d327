use std::fmt::{self, Display};

use thiserror::Error;

/// The reason a media type could not be parsed.
///
/// Every kind is fatal for the whole parse, malformed parameters are never
/// reported through this type as they are dropped instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    #[error("no type present")]
    NoType,
    #[error("type contains a non token character")]
    InvalidType,
    #[error("no subtype present")]
    NoSubType,
    #[error("subtype contains a non token character")]
    InvalidSubType,
}

impl ErrorKind {
    pub(crate) fn with_input(self, input: &str) -> ParserError {
        ParserError::new(input, self)
    }
}

/// A failed attempt to parse a media type.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub struct ParserError {
    input: String,
    kind: ErrorKind,
}

impl ParserError {
    pub fn new(input: impl Into<String>, kind: ErrorKind) -> Self {
        ParserError { input: input.into(), kind }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The input as it was passed to the parser (before whitespace stripping).
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl Display for ParserError {
    fn fmt(&self, fter: &mut fmt::Formatter) -> fmt::Result {
        write!(fter, "parsing {:?} failed: {}", self.input, self.kind)
    }
}

/// Returned when a parameter is requested which the media type does not have.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("media type has no parameter named {name:?}")]
pub struct ParamNotFound {
    pub name: String,
}

/// Errors of [`MediaType::from_parts`](crate::MediaType::from_parts).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("type {type_:?} is empty or contains a non token character at {pos}")]
    InvalidType { type_: String, pos: usize },
    #[error("subtype {subtype:?} is empty or contains a non token character at {pos}")]
    InvalidSubType { subtype: String, pos: usize },
    #[error("parameter name {name:?} is empty or contains a non token character")]
    InvalidParamName { name: String },
    #[error("value of parameter {name:?} contains a character which can not be quoted")]
    InvalidParamValue { name: String },
    #[error("parameter {name:?} was given more than once")]
    DuplicateParam { name: String },
}
