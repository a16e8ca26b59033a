use thiserror::Error;

use crate::constant::*;
use crate::parser::Registry;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A parameter was declared incorrectly.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// The input tokens could not be parsed.
///
/// The `Display` of each variant is the diagnostic shown to the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Fewer tokens were provided than there are unsatisfied required parameters.
    #[error("Not all required arguments are specified")]
    NotEnoughArguments,
    /// A token reduced to neither a key nor a value.
    #[error("Parameter format parse error: {0}")]
    Format(String),
    /// A token named a key that no parameter carries.
    #[error("An unknown parameter key is specified: {0}")]
    UnknownKey(String),
    /// A key expecting a value was the final token.
    #[error("Expected value for the key: {0}")]
    ExpectedValue(String),
    /// A required parameter holds no value after parsing.
    #[error("Expected required parameter value: {short} [{long}]")]
    MissingRequired {
        /// The short alias of the parameter.
        short: String,
        /// The long alias of the parameter.
        long: String,
    },
}

/// One input token, split into its key and optional inline value.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Token<'t> {
    pub(crate) key: &'t str,
    pub(crate) value: Option<&'t str>,
}

/// Classify a raw token.
///
/// Leading `-` are stripped.
/// A single remaining character is always a bare key (`-=` is the key `=`).
/// Otherwise the token is split on its first `=` into a key and inline value, each with trailing spaces removed.
pub(crate) fn tokenize(raw: &str) -> Result<Token<'_>, ParseError> {
    let parm = raw.trim_start_matches(ALIAS_PREFIX);

    if parm.chars().count() == 1 {
        return Ok(Token {
            key: parm,
            value: None,
        });
    }

    let token = match parm.split_once(VALUE_SEPARATOR) {
        Some((key, value)) => Token {
            key: key.trim_end_matches(' '),
            value: Some(value.trim_end_matches(' ')),
        },
        None => Token {
            key: parm,
            value: None,
        },
    };

    if token.key.is_empty() && token.value.map_or(true, str::is_empty) {
        return Err(ParseError::Format(parm.to_string()));
    }

    Ok(token)
}

/// Walk the tokens against the registry, binding values onto the matched parameters.
///
/// The first token is the program name and is skipped.
/// Parsing stops at the first error; bindings made before it are kept.
pub(crate) fn consume(registry: &mut Registry, tokens: &[&str]) -> Result<(), ParseError> {
    let last = tokens.len().saturating_sub(1);

    if last < registry.unbound_required() {
        return Err(ParseError::NotEnoughArguments);
    }

    let mut i = 1;

    while i < tokens.len() {
        let Token { key, value } = tokenize(tokens[i])?;
        let id = registry.resolve(key).ok_or_else(|| {
            ParseError::UnknownKey(tokens[i].trim_start_matches(ALIAS_PREFIX).to_string())
        })?;
        let parameter = registry.parameter_mut(id);

        if parameter.is_flag() {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Token {i} '{key}' matched flag {id}.");
            }
            parameter.matched();
            i += 1;
            continue;
        }

        let value = match value {
            Some(value) if !value.is_empty() => value,
            _ => {
                // The value must be the next token.
                if i == last {
                    return Err(ParseError::ExpectedValue(key.to_string()));
                }

                i += 1;
                tokens[i]
            }
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Token '{key}' bound '{value}' onto {id}.");
        }
        parameter.bind(value);
        parameter.matched();
        i += 1;
    }

    check_required(registry)
}

fn check_required(registry: &Registry) -> Result<(), ParseError> {
    match registry
        .parameters()
        .into_iter()
        .find(|p| p.is_required() && p.value_as_str().is_empty())
    {
        Some(parameter) => Err(ParseError::MissingRequired {
            short: parameter.short_alias().to_string(),
            long: parameter.long_alias().to_string(),
        }),
        None => Ok(()),
    }
}
