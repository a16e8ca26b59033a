//! Builder module for `cliap`.
//! See the `cliap` crate root for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod model;
mod parser;

pub use api::*;
pub use parser::{ConfigError, ParseError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
