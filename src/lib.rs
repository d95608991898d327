//! # Media Type
//!
//! Parsing and serialization of media types (also known as MIME types) as
//! found in e.g. the HTTP `Content-Type` header.
//!
//! Parsing is lenient in the way browsers are: surrounding whitespace is
//! ignored, type, subtype and parameter names are lowercased, and malformed
//! or duplicate parameters are dropped instead of failing the whole media
//! type. Only a missing or invalid type/subtype is an error.
//!
//! ```
//! use media_type::MediaType;
//!
//! let mt: MediaType = " Text/HTML;Charset=\"utf-8\";charset=gbk;foo ".parse().unwrap();
//! assert_eq!(mt.type_(), "text");
//! assert_eq!(mt.subtype(), "html");
//! assert_eq!(mt.get_param("charset"), Some("utf-8"));
//! assert_eq!(mt.to_string(), "text/html;charset=utf-8");
//! ```
//!
//! ## Serialization
//!
//! The `Display` impl produces the canonical form, parameter values are only
//! quoted if they have to be:
//!
//! ```
//! use media_type::MediaType;
//!
//! let mt = MediaType::parse("text/plain;a=\"bare\";b=\"not bare\"").unwrap();
//! assert_eq!(mt.to_string(), "text/plain;a=bare;b=\"not bare\"");
//! ```
//!
//! ## Features
//!
//! - `serde`: (de-)serialize `MediaType` as a string
//! - `tracing`: emit `trace` events for parameters dropped while parsing

#[macro_use]
mod macros;
pub mod error;
pub mod grammar;
mod gen;
mod groups;
mod media_type;
mod parse;
#[cfg(feature = "serde")]
pub mod serde;

pub use self::error::{BuildError, ErrorKind, ParamNotFound, ParserError};
pub use self::media_type::{MediaType, Params};
