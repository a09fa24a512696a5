//! Internationalization for Storefront
//!
//! This crate defines the supported UI languages and negotiates the
//! device locale against them.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod lang;

pub use lang::{detect, negotiate, parse_tag, Language, LanguageError};
