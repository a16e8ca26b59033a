mod base;
mod interface;
mod printer;
mod registry;

pub use base::{ConfigError, ParseError};
pub(crate) use base::*;
pub(crate) use interface::*;
pub(crate) use printer::*;
pub(crate) use registry::*;
