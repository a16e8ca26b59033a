//! `cliap` is a small command line argument parser for Rust.
//!
//! Parameters are declared by name, the command line is parsed, and then each value is read back by alias.
//! `cliap` prioritizes the following:
//! * *Simple declarations*:
//! A parameter is named with a combined string such as `"p,port"`.
//! The one letter name becomes the short alias (`-p`), and the longer name becomes the long alias (`--port`).
//! * *Values on demand*:
//! Values are stored as text, and converted at the point of use via [`std::str::FromStr`].
//! * *Plain UX*:
//! The help message is a single aligned listing of the parameters, with descriptions wrapped to the terminal width.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/basic_usage.rs")]
//! ```
//!
//! ```console
//! $ basic_usage -h
//! Usage:
//!     basic_usage --target-port=8080 [--target-host=localhost]
//!
//!     -h [ --help        ] Show this help message.
//!     -p [ --target-port ] The port to connect to. [required]
//!     -t [ --target-host ] The host to connect to. [required] (default: 127.0.0.1)
//!
//! $ basic_usage -p 8080
//! Connecting to 127.0.0.1:8080
//!
//! $ basic_usage -t localhost
//! Expected required parameter value: p [target-port]
//! Usage:
//! <truncated>
//! ```
//!
//! # Parameters
//! Configure `cliap` by starting with a [`CommandLineParser`] and `add`ing a [`Parameter`] for each option.
//! * [`Parameter::named`] takes one or two comma separated names; leading dashes are ignored.
//! Two one letter names, or two longer names, are rejected (see [`Parameter::try_named`] for the `Result` form).
//! * [`Parameter::flag`] marks a parameter that takes no value; its presence is read via [`Parameter::is_parsed`].
//! * [`Parameter::required`] marks a parameter that must hold a value after parsing.
//! A required parameter with a default is always satisfied.
//! * [`Parameter::set_default`] seeds the value as soon as the parameter is added.
//!
//! When a later parameter re-uses an alias, it takes over that alias, and the earlier parameter drops out of the listing.
//!
//! # Tokens
//! The first token is the program name, and is skipped.
//! Every other token is a key, optionally carrying its value:
//! * `-p 8080` or `--port 8080`: the value is the next token.
//! * `--port=8080`: the value is inline.
//! * `-v`: a flag never takes the next token.
//!
//! Parsing stops at the first [`ParseError`].
//!
//! # Features
//! * `unit_test`: exposes `CommandLineParser::help_message`, to render the help message into a `String`.
//! * `tracing_debug`: emits debug events via [`tracing`](https://docs.rs/tracing).
pub use cliap_builder::*;
